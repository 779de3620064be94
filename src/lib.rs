//! Flappy - Terminal Arcade Flyer
//!
//! The simulation core (bird physics, pipes, collision and scoring, session
//! state machine) plus the terminal frontend that plays it.

pub mod build_info;
pub mod cli;
pub mod core;
pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod ui;

pub use crate::core::{FrameClock, GameConfig};
pub use error::{ConfigError, FlappyError};
pub use game::{FrameRequest, GamePhase, GameSession};

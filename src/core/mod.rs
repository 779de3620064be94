//! Configuration, constants and frame timing shared by the game and the binary.

pub mod clock;
pub mod config;
pub mod constants;

pub use clock::FrameClock;
pub use config::GameConfig;
pub use constants::*;

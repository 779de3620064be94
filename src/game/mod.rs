//! The flyer simulation: bird physics, pipe obstacles, collision and
//! scoring, and the START -> PLAYING -> GAMEOVER session state machine.
//!
//! Everything here is frame-driven and deterministic given an RNG. Drawing,
//! score display and overlays are reached through the traits in
//! [`crate::render`].

pub mod collision;
pub mod physics;
pub mod pipes;
pub mod session;
pub mod types;

pub use collision::*;
pub use physics::*;
pub use pipes::*;
pub use session::*;
pub use types::*;

//! Entity state for the bird, pipes and ground.

use crate::core::config::{BirdConfig, GameConfig};

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Idle bird, waiting for the first action.
    Start,
    /// Frame loop running.
    Playing,
    /// Crashed. Only a reset leaves this phase.
    GameOver,
}

/// What a frame asks of the frame clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// Schedule another frame.
    Next,
    /// Stop the loop; no further frames until play starts again.
    Halt,
}

/// The player's bird. x never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Drawing radius of the body.
    pub radius: f64,
    /// Vertical velocity in units/frame (positive = downward).
    pub velocity: f64,

    // Cached physics parameters
    pub start_y: f64,
    pub gravity: f64,
    pub flap_impulse: f64,
}

impl Bird {
    pub fn new(config: &GameConfig) -> Self {
        let BirdConfig {
            x,
            start_y,
            width,
            height,
            radius,
        } = config.bird;
        Self {
            x,
            y: start_y,
            width,
            height,
            radius,
            velocity: 0.0,
            start_y,
            gravity: config.physics.gravity,
            flap_impulse: config.physics.flap_impulse,
        }
    }

    /// Center of the drawn body.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A pipe obstacle: a top segment hanging from the ceiling and a bottom
/// segment standing on the ground, with a fixed gap between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge; decreases every frame.
    pub x: f64,
    pub width: f64,
    /// Height of the top segment, measured from y = 0.
    pub top: f64,
    /// Height of the bottom segment, measured up from the playfield bottom.
    pub bottom: f64,
    /// Already counted towards the score.
    pub passed: bool,
}

impl Pipe {
    /// Trailing (right) edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Fully past the left edge of the playfield.
    pub fn is_offscreen(&self) -> bool {
        self.right() < 0.0
    }
}

/// Scrolling ground band. The offset is cosmetic; the floor line is fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct Ground {
    pub offset: f64,
    pub speed: f64,
    pub stripe_spacing: f64,
}

impl Ground {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            offset: 0.0,
            speed: config.pipes.speed,
            stripe_spacing: config.ground.stripe_spacing,
        }
    }

    /// Scroll at pipe speed, wrapping once a full stripe has passed.
    pub fn update(&mut self) {
        self.offset -= self.speed;
        if self.offset <= -self.stripe_spacing {
            self.offset = 0.0;
        }
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
    }
}

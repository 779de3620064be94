//! Bird physics: explicit Euler integration, one step per frame.

use super::types::Bird;
use crate::core::config::Playfield;

/// Boundary the bird touched during an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Airborne,
    /// Hit the ceiling. Clamped and stopped, not fatal.
    Ceiling,
    /// Hit the ground. Fatal.
    Floor,
}

impl Bird {
    /// Apply gravity, move, and clamp to the playfield.
    ///
    /// Afterwards `y` always lies in `[0, floor_y - height]`.
    pub fn update(&mut self, playfield: &Playfield) -> Contact {
        self.velocity += self.gravity;
        self.y += self.velocity;

        let lowest = playfield.floor_y() - self.height;
        if self.y >= lowest {
            self.y = lowest;
            self.velocity = 0.0;
            return Contact::Floor;
        }

        if self.y < 0.0 {
            self.y = 0.0;
            self.velocity = 0.0;
            return Contact::Ceiling;
        }

        Contact::Airborne
    }

    /// Set velocity to the flap impulse, discarding the current velocity.
    pub fn flap(&mut self) {
        self.velocity = self.flap_impulse;
    }

    pub fn reset(&mut self) {
        self.y = self.start_y;
        self.velocity = 0.0;
    }
}

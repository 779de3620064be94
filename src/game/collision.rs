//! Axis-aligned overlap tests and pass-through scoring checks.

use super::types::{Bird, Pipe};
use crate::core::config::Playfield;

/// The bird's horizontal span intersects the pipe's.
pub fn overlaps_x(bird: &Bird, pipe: &Pipe) -> bool {
    bird.x + bird.width > pipe.x && bird.x < pipe.right()
}

/// The bird is outside the gap: above the top segment's lower edge or below
/// the bottom segment's upper edge.
pub fn outside_gap(bird: &Bird, pipe: &Pipe, playfield: &Playfield) -> bool {
    let bottom_edge = playfield.height as f64 - pipe.bottom;
    bird.y < pipe.top || bird.y + bird.height > bottom_edge
}

/// Fatal contact. The vertical test only matters while the spans overlap.
pub fn collides(bird: &Bird, pipe: &Pipe, playfield: &Playfield) -> bool {
    overlaps_x(bird, pipe) && outside_gap(bird, pipe, playfield)
}

/// The pipe's trailing edge is left of the bird and it has not been counted.
pub fn should_score(bird: &Bird, pipe: &Pipe) -> bool {
    !pipe.passed && pipe.right() < bird.x
}

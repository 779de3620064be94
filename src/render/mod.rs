//! Collaborator interfaces the simulation talks to.
//!
//! The game never touches terminal types. It emits draw commands onto a
//! [`RenderSurface`], pushes numbers to a [`ScoreDisplay`], and toggles
//! [`Overlays`]. The terminal frontend in [`crate::ui`] implements all three;
//! tests use [`DisplayList`] and small recording frontends.

pub mod display_list;
pub mod scene;

pub use display_list::{DisplayList, DrawCommand};
pub use scene::draw_scene;

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Axis-aligned rectangle in playfield units. Origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Drawing primitives, in playfield coordinates.
pub trait RenderSurface {
    /// Start a new frame by painting the whole surface in `color`.
    fn clear(&mut self, color: Rgb);
    fn fill_rect(&mut self, rect: Rect, color: Rgb);
    fn stroke_rect(&mut self, rect: Rect, color: Rgb);
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb);
    fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb);
    fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, color: Rgb);
    fn stroke_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, color: Rgb);
    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb);
}

/// Receives score updates.
pub trait ScoreDisplay {
    /// Current score, pushed on every change.
    fn show_score(&mut self, score: u32);
    /// Final score, pushed once when the run ends.
    fn show_final_score(&mut self, score: u32);
}

/// Screen overlays driven by phase transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    Start,
    GameOver,
}

pub trait Overlays {
    fn set_overlay(&mut self, overlay: Overlay, visible: bool);
}

/// Everything a game session needs from its host.
pub trait Frontend: RenderSurface + ScoreDisplay + Overlays {}

impl<T: RenderSurface + ScoreDisplay + Overlays> Frontend for T {}

//! Terminal frontend: implements the game's render, score and overlay
//! collaborators and draws them with ratatui.

pub mod flappy_scene;
pub mod game_common;
pub mod pixel_grid;

use crate::game::GameSession;
use crate::render::{DisplayList, Overlay, Overlays, Rect, RenderSurface, Rgb, ScoreDisplay};
use ratatui::Frame;

/// Everything the game pushed to the screen since the last redraw request.
#[derive(Debug, Clone, Default)]
pub struct TerminalFrontend {
    scene: DisplayList,
    score: u32,
    final_score: Option<u32>,
    start_visible: bool,
    game_over_visible: bool,
}

impl TerminalFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> &DisplayList {
        &self.scene
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    pub fn start_visible(&self) -> bool {
        self.start_visible
    }

    pub fn game_over_visible(&self) -> bool {
        self.game_over_visible
    }
}

impl RenderSurface for TerminalFrontend {
    fn clear(&mut self, color: Rgb) {
        self.scene.clear(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.scene.fill_rect(rect, color);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgb) {
        self.scene.stroke_rect(rect, color);
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb) {
        self.scene.fill_circle(cx, cy, radius, color);
    }

    fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb) {
        self.scene.stroke_circle(cx, cy, radius, color);
    }

    fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, color: Rgb) {
        self.scene.fill_ellipse(cx, cy, rx, ry, color);
    }

    fn stroke_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, color: Rgb) {
        self.scene.stroke_ellipse(cx, cy, rx, ry, color);
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb) {
        self.scene.line(from, to, color);
    }
}

impl ScoreDisplay for TerminalFrontend {
    fn show_score(&mut self, score: u32) {
        self.score = score;
    }

    fn show_final_score(&mut self, score: u32) {
        self.final_score = Some(score);
    }
}

impl Overlays for TerminalFrontend {
    fn set_overlay(&mut self, overlay: Overlay, visible: bool) {
        match overlay {
            Overlay::Start => self.start_visible = visible,
            Overlay::GameOver => {
                self.game_over_visible = visible;
                if !visible {
                    self.final_score = None;
                }
            }
        }
    }
}

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, ui: &TerminalFrontend, session: &GameSession) {
    let area = frame.size();
    flappy_scene::render_flappy(frame, area, ui, session);
}

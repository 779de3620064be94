//! Recording frontend shared by the integration tests.

#![allow(dead_code)]

use flappy::render::{DisplayList, Overlay, Overlays, Rect, RenderSurface, Rgb, ScoreDisplay};
use flappy::{GameConfig, GameSession};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// Records everything a session pushes to its host.
#[derive(Default)]
pub struct Recorder {
    pub scene: DisplayList,
    pub redraws: usize,
    pub scores: Vec<u32>,
    pub final_scores: Vec<u32>,
    pub overlays: HashMap<Overlay, bool>,
}

impl Recorder {
    pub fn overlay(&self, overlay: Overlay) -> bool {
        self.overlays.get(&overlay).copied().unwrap_or(false)
    }
}

impl RenderSurface for Recorder {
    fn clear(&mut self, color: Rgb) {
        self.redraws += 1;
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

impl ScoreDisplay for Recorder {
    fn show_score(&mut self, score: u32) {
        self.scores.push(score);
    }
    fn show_final_score(&mut self, score: u32) {
        self.final_scores.push(score);
    }
}

impl Overlays for Recorder {
    fn set_overlay(&mut self, overlay: Overlay, visible: bool) {
        self.overlays.insert(overlay, visible);
    }
}

pub fn new_game(seed: u64) -> (GameSession, Recorder, ChaCha8Rng) {
    (
        GameSession::new(GameConfig::default()),
        Recorder::default(),
        ChaCha8Rng::seed_from_u64(seed),
    )
}

/// Flap whenever the bird sits below a point 60 units under the next
/// pipe's top segment. Keeps the bird inside every gap at default settings.
pub fn autopilot_wants_flap(session: &GameSession) -> bool {
    let bird = session.bird();
    let target = session
        .pipes()
        .pipes()
        .iter()
        .find(|pipe| pipe.right() >= bird.x)
        .map(|pipe| pipe.top + 60.0)
        .unwrap_or(bird.start_y);
    bird.y > target
}

//! Game session: owns every piece of per-run state and drives the
//! START -> PLAYING -> GAMEOVER state machine.

use super::physics::Contact;
use super::pipes::PipeField;
use super::types::{Bird, FrameRequest, GamePhase, Ground};
use crate::core::config::GameConfig;
use crate::render::{draw_scene, Frontend, Overlay, Overlays, RenderSurface};
use log::{debug, info, trace};
use rand::Rng;

/// One game session. Replaces what would otherwise be process-wide globals
/// (frame counter, score, phase, entities).
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    phase: GamePhase,
    bird: Bird,
    pipes: PipeField,
    ground: Ground,
    score: u32,
    /// Frames simulated since the last reset.
    frames: u64,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            phase: GamePhase::Start,
            bird: Bird::new(&config),
            pipes: PipeField::new(&config),
            ground: Ground::new(&config),
            score: 0,
            frames: 0,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &PipeField {
        &self.pipes
    }

    pub fn pipes_mut(&mut self) -> &mut PipeField {
        &mut self.pipes
    }

    pub fn ground(&self) -> &Ground {
        &self.ground
    }

    /// Initial presentation: overlays for the current phase, score, one redraw.
    pub fn present<F: Frontend>(&self, frontend: &mut F) {
        frontend.set_overlay(Overlay::Start, self.phase == GamePhase::Start);
        frontend.set_overlay(Overlay::GameOver, self.phase == GamePhase::GameOver);
        frontend.show_score(self.score);
        self.draw(frontend);
    }

    /// The player's single input action.
    ///
    /// Returns true when the frame loop should start.
    pub fn action<O: Overlays>(&mut self, overlays: &mut O) -> bool {
        match self.phase {
            GamePhase::Start => {
                self.phase = GamePhase::Playing;
                overlays.set_overlay(Overlay::Start, false);
                self.bird.flap();
                info!("run started");
                true
            }
            GamePhase::Playing => {
                self.bird.flap();
                false
            }
            GamePhase::GameOver => false,
        }
    }

    /// Run one frame. Does nothing unless playing.
    ///
    /// Order within a frame: bird physics, pipes (collision and scoring
    /// against the already-moved bird), ground scroll, game-over transition,
    /// redraw, frame counter.
    pub fn frame<R: Rng, F: Frontend>(&mut self, rng: &mut R, frontend: &mut F) -> FrameRequest {
        if self.phase != GamePhase::Playing {
            return FrameRequest::Halt;
        }

        let contact = self.bird.update(&self.config.playfield);
        trace!(
            "frame {} y={:.2} v={:.2}",
            self.frames,
            self.bird.y,
            self.bird.velocity
        );

        let report = self
            .pipes
            .update(self.frames, &self.bird, &self.config.playfield, rng);
        for _ in 0..report.passed {
            self.score += 1;
            frontend.show_score(self.score);
        }

        self.ground.update();

        if contact == Contact::Floor {
            debug!("bird hit the ground");
            self.game_over(frontend);
        } else if report.collided {
            debug!("bird hit a pipe");
            self.game_over(frontend);
        }

        self.draw(frontend);
        self.frames += 1;

        match self.phase {
            GamePhase::Playing => FrameRequest::Next,
            _ => FrameRequest::Halt,
        }
    }

    fn game_over<F: Frontend>(&mut self, frontend: &mut F) {
        self.phase = GamePhase::GameOver;
        frontend.set_overlay(Overlay::GameOver, true);
        frontend.show_final_score(self.score);
        info!(
            "game over: score {} after {} frames",
            self.score, self.frames
        );
    }

    /// Back to START from START or GAMEOVER. Ignored mid-run.
    pub fn reset_game<F: Frontend>(&mut self, frontend: &mut F) {
        if self.phase == GamePhase::Playing {
            debug!("reset ignored while playing");
            return;
        }

        self.bird.reset();
        self.pipes.reset();
        self.ground.reset();
        self.score = 0;
        self.frames = 0;
        self.phase = GamePhase::Start;

        frontend.show_score(self.score);
        frontend.set_overlay(Overlay::GameOver, false);
        frontend.set_overlay(Overlay::Start, true);
        self.draw(frontend);
        info!("session reset");
    }

    /// Redraw the current scene.
    pub fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        draw_scene(
            surface,
            &self.config,
            &self.bird,
            self.pipes.pipes(),
            &self.ground,
        );
    }
}

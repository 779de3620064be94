//! Pipe obstacle manager: spawning, scrolling, collision/scoring, recycling.

use super::collision::{collides, should_score};
use super::types::{Bird, Pipe};
use crate::core::config::{GameConfig, Playfield};
use log::debug;
use rand::Rng;

/// Outcome of one [`PipeField::update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipeReport {
    /// The bird hit at least one pipe.
    pub collided: bool,
    /// Pipes whose trailing edge crossed the bird this frame.
    pub passed: u32,
    pub spawned: bool,
    pub recycled: usize,
}

/// Active pipes in spawn order, which is also left-to-right screen order.
#[derive(Debug, Clone)]
pub struct PipeField {
    pipes: Vec<Pipe>,

    // Cached config
    speed: f64,
    spawn_interval: u64,
    gap: u32,
    width: f64,
    min_height: u32,
    max_top: u32,
}

impl PipeField {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pipes: Vec::new(),
            speed: config.pipes.speed,
            spawn_interval: config.pipes.spawn_interval.max(1),
            gap: config.pipes.gap,
            width: config.pipes.width,
            min_height: config.pipes.min_height,
            max_top: config.max_pipe_top().max(config.pipes.min_height),
        }
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    /// Insert a pipe directly (scenario setup and tests).
    pub fn push(&mut self, pipe: Pipe) {
        self.pipes.push(pipe);
    }

    /// Run one frame: spawn on cadence, advance every pipe while checking it
    /// against the bird, then drop every pipe that has left the screen.
    pub fn update<R: Rng>(
        &mut self,
        frame: u64,
        bird: &Bird,
        playfield: &Playfield,
        rng: &mut R,
    ) -> PipeReport {
        let mut report = PipeReport::default();

        if frame % self.spawn_interval == 0 {
            self.spawn(playfield, rng);
            report.spawned = true;
        }

        for pipe in &mut self.pipes {
            pipe.x -= self.speed;

            if collides(bird, pipe, playfield) {
                report.collided = true;
            }

            if should_score(bird, pipe) {
                pipe.passed = true;
                report.passed += 1;
            }
        }

        let before = self.pipes.len();
        self.pipes.retain(|pipe| !pipe.is_offscreen());
        report.recycled = before - self.pipes.len();
        if report.recycled > 0 {
            debug!(
                "recycled {} pipe(s), {} active",
                report.recycled,
                self.pipes.len()
            );
        }

        report
    }

    /// Spawn a pipe at the right edge with a uniformly random top height.
    pub fn spawn<R: Rng>(&mut self, playfield: &Playfield, rng: &mut R) {
        let top = rng.gen_range(self.min_height..=self.max_top);
        self.spawn_with_top(top, playfield);
    }

    /// Spawn a pipe at the right edge with the given top height. The bottom
    /// segment takes whatever the gap leaves above the ground.
    pub fn spawn_with_top(&mut self, top: u32, playfield: &Playfield) {
        let bottom = playfield.open_height().saturating_sub(top + self.gap);
        debug!("spawned pipe top={} bottom={}", top, bottom);
        self.pipes.push(Pipe {
            x: playfield.width as f64,
            width: self.width,
            top: top as f64,
            bottom: bottom as f64,
            passed: false,
        });
    }

    pub fn reset(&mut self) {
        self.pipes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn setup() -> (PipeField, Bird, Playfield) {
        let config = GameConfig::default();
        (
            PipeField::new(&config),
            Bird::new(&config),
            config.playfield,
        )
    }

    fn pipe_at(x: f64) -> Pipe {
        Pipe {
            x,
            width: 52.0,
            top: 50.0,
            bottom: 310.0,
            passed: true,
        }
    }

    #[test]
    fn test_spawn_pinned_to_minimum() {
        let (mut field, _, playfield) = setup();
        field.spawn_with_top(50, &playfield);
        let pipe = &field.pipes()[0];
        assert!((pipe.top - 50.0).abs() < f64::EPSILON);
        assert!((pipe.bottom - (480.0 - 20.0 - 150.0)).abs() < f64::EPSILON);
        assert!((pipe.x - 320.0).abs() < f64::EPSILON);
        assert!(!pipe.passed);
    }

    #[test]
    fn test_random_spawns_fill_open_height_exactly() {
        let (mut field, _, playfield) = setup();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            field.spawn(&playfield, &mut rng);
        }
        for pipe in field.pipes() {
            assert_eq!(pipe.top + 100.0 + pipe.bottom, 460.0);
            assert!(pipe.top >= 50.0 && pipe.top <= 310.0);
            assert!(pipe.bottom >= 50.0);
            assert_eq!(pipe.top.fract(), 0.0);
        }
    }

    #[test]
    fn test_spawns_only_on_cadence() {
        let (mut field, bird, playfield) = setup();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(field.update(0, &bird, &playfield, &mut rng).spawned);
        for frame in 1..100 {
            assert!(!field.update(frame, &bird, &playfield, &mut rng).spawned);
        }
        assert!(field.update(100, &bird, &playfield, &mut rng).spawned);
        assert_eq!(field.len(), 2);
    }

    #[test]
    fn test_spawned_pipe_advances_same_frame() {
        let (mut field, bird, playfield) = setup();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        field.update(0, &bird, &playfield, &mut rng);
        assert!((field.pipes()[0].x - 318.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pipe_at_minus_one_survives_advance() {
        let (mut field, bird, playfield) = setup();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        field.push(pipe_at(-1.0));
        field.update(1, &bird, &playfield, &mut rng);
        assert_eq!(field.len(), 1);
        assert!((field.pipes()[0].x - (-3.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pipe_removed_when_trailing_edge_crosses_zero() {
        let (mut field, bird, playfield) = setup();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        field.push(pipe_at(-1.0));
        // Trailing edge: 51 -> 49 -> ... -> 1 after 25 frames, -1 on the 26th
        for frame in 1..=25 {
            field.update(frame, &bird, &playfield, &mut rng);
            assert_eq!(field.len(), 1, "removed early at frame {}", frame);
        }
        let report = field.update(26, &bird, &playfield, &mut rng);
        assert_eq!(report.recycled, 1);
        assert!(field.is_empty());
    }

    #[test]
    fn test_multiple_removals_skip_nothing() {
        let (mut field, bird, playfield) = setup();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        // Three expiring pipes interleaved with two visible ones
        field.push(pipe_at(-60.0));
        field.push(pipe_at(-55.0));
        field.push(pipe_at(150.0));
        field.push(pipe_at(-53.0));
        field.push(pipe_at(250.0));

        let report = field.update(1, &bird, &playfield, &mut rng);
        assert_eq!(report.recycled, 3);
        let xs: Vec<f64> = field.pipes().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![148.0, 248.0]);
    }

    #[test]
    fn test_every_pipe_advances_even_when_neighbors_expire() {
        let (mut field, bird, playfield) = setup();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        field.push(pipe_at(-51.0));
        field.push(Pipe {
            passed: false,
            ..pipe_at(-2.0)
        });

        let report = field.update(1, &bird, &playfield, &mut rng);
        // First expires, second advances to -4 and scores
        assert_eq!(report.recycled, 1);
        assert_eq!(report.passed, 1);
        assert!((field.pipes()[0].x - (-4.0)).abs() < f64::EPSILON);
        assert!(field.pipes()[0].passed);
    }

    #[test]
    fn test_pass_counted_once() {
        let (mut field, bird, playfield) = setup();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        field.push(Pipe {
            passed: false,
            ..pipe_at(10.0)
        });

        let mut total = 0;
        for frame in 1..60 {
            total += field.update(frame, &bird, &playfield, &mut rng).passed;
        }
        assert_eq!(total, 1);
    }

    #[test]
    fn test_collision_reported() {
        let (mut field, mut bird, playfield) = setup();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        bird.y = 10.0;
        field.push(Pipe {
            top: 100.0,
            bottom: 260.0,
            passed: false,
            ..pipe_at(62.0)
        });
        assert!(field.update(1, &bird, &playfield, &mut rng).collided);
    }

    #[test]
    fn test_reset_clears() {
        let (mut field, _, playfield) = setup();
        field.spawn_with_top(120, &playfield);
        field.spawn_with_top(80, &playfield);
        field.reset();
        assert!(field.is_empty());
    }
}

//! Game configuration.
//!
//! Every tunable constant lives here. Defaults reproduce the classic feel
//! on a 320x480 playfield; a TOML file can override any subset of fields.

use super::constants::*;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Logical drawing area. Origin is top-left, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playfield {
    pub width: u32,
    pub height: u32,
    /// Height of the ground band at the bottom. Touching it is fatal.
    pub ground_height: u32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,
        }
    }
}

impl Playfield {
    /// Y coordinate of the ground line.
    pub fn floor_y(&self) -> f64 {
        self.height as f64 - self.ground_height as f64
    }

    /// Vertical space above the ground, shared by top pipe, gap and bottom pipe.
    pub fn open_height(&self) -> u32 {
        self.height.saturating_sub(self.ground_height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirdConfig {
    pub x: f64,
    pub start_y: f64,
    pub width: f64,
    pub height: f64,
    /// Drawing radius of the body.
    pub radius: f64,
}

impl Default for BirdConfig {
    fn default() -> Self {
        Self {
            x: BIRD_X,
            start_y: BIRD_START_Y,
            width: BIRD_WIDTH,
            height: BIRD_HEIGHT,
            radius: BIRD_RADIUS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Velocity change per frame (positive = downward).
    pub gravity: f64,
    /// Velocity set by a flap. Overrides, never adds.
    pub flap_impulse: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipeConfig {
    /// Leftward scroll per frame.
    pub speed: f64,
    /// A pipe spawns on every frame divisible by this.
    pub spawn_interval: u64,
    pub gap: u32,
    pub width: f64,
    /// Minimum height of the top and bottom segments.
    pub min_height: u32,
    pub cap_height: f64,
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            speed: PIPE_SPEED,
            spawn_interval: PIPE_SPAWN_INTERVAL,
            gap: PIPE_GAP,
            width: PIPE_WIDTH,
            min_height: PIPE_MIN_HEIGHT,
            cap_height: PIPE_CAP_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    pub stripe_spacing: f64,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            stripe_spacing: GROUND_STRIPE_SPACING,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub frame_interval_ms: u64,
    /// Upper bound on frames replayed after a stall.
    pub max_catch_up_frames: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: FRAME_INTERVAL_MS,
            max_catch_up_frames: MAX_CATCH_UP_FRAMES,
        }
    }
}

/// Complete configuration for a game session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub playfield: Playfield,
    pub bird: BirdConfig,
    pub physics: PhysicsConfig,
    pub pipes: PipeConfig,
    pub ground: GroundConfig,
    pub timing: TimingConfig,
}

impl GameConfig {
    /// Load and validate a TOML config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize as TOML (used by `--dump-config`).
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Highest top-segment height a spawned pipe may get.
    pub fn max_pipe_top(&self) -> u32 {
        self.playfield
            .open_height()
            .saturating_sub(self.pipes.gap.saturating_add(self.pipes.min_height))
    }

    /// Reject configurations the simulation cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        let floats = [
            self.bird.x,
            self.bird.start_y,
            self.bird.width,
            self.bird.height,
            self.bird.radius,
            self.physics.gravity,
            self.physics.flap_impulse,
            self.pipes.speed,
            self.pipes.width,
            self.pipes.cap_height,
            self.ground.stripe_spacing,
        ];
        if floats.iter().any(|v| !v.is_finite()) {
            return invalid("numeric settings must be finite");
        }

        let field = &self.playfield;
        if field.width == 0 || field.height == 0 {
            return invalid("playfield dimensions must be positive");
        }
        if field.ground_height == 0 || field.ground_height >= field.height {
            return invalid("ground height must be positive and below the playfield height");
        }

        let bird = &self.bird;
        if bird.width <= 0.0 || bird.height <= 0.0 || bird.radius <= 0.0 {
            return invalid("bird dimensions must be positive");
        }
        if bird.start_y < 0.0 || bird.start_y > field.floor_y() - bird.height {
            return invalid("bird start_y must lie between the ceiling and the ground");
        }

        if self.physics.flap_impulse >= 0.0 {
            return invalid("flap impulse must be negative (upward)");
        }

        let pipes = &self.pipes;
        if pipes.width <= 0.0 || pipes.speed <= 0.0 {
            return invalid("pipe width and speed must be positive");
        }
        if pipes.spawn_interval == 0 {
            return invalid("pipe spawn interval must be at least one frame");
        }
        if pipes.gap == 0 {
            return invalid("pipe gap must be positive");
        }
        // Widened so oversized values from a config file cannot overflow
        let needed = pipes.gap as u64 + 2 * pipes.min_height as u64;
        if needed > field.open_height() as u64 {
            return invalid("pipe gap plus two minimum pipe heights exceeds the open playfield");
        }

        if self.ground.stripe_spacing <= 0.0 {
            return invalid("ground stripe spacing must be positive");
        }
        if self.timing.frame_interval_ms == 0 {
            return invalid("frame interval must be at least 1 ms");
        }
        if self.timing.max_catch_up_frames == 0 {
            return invalid("max catch-up frames must be at least 1");
        }

        Ok(())
    }
}

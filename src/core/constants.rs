// Playfield (logical units)
pub const PLAYFIELD_WIDTH: u32 = 320;
pub const PLAYFIELD_HEIGHT: u32 = 480;
pub const GROUND_HEIGHT: u32 = 20;

// Bird
pub const BIRD_X: f64 = 50.0;
pub const BIRD_START_Y: f64 = 150.0;
pub const BIRD_WIDTH: f64 = 34.0;
pub const BIRD_HEIGHT: f64 = 24.0;
pub const BIRD_RADIUS: f64 = 12.0;

// Physics (per frame)
pub const GRAVITY: f64 = 0.25;
pub const FLAP_IMPULSE: f64 = -4.5;

// Pipes
pub const PIPE_SPEED: f64 = 2.0;
pub const PIPE_SPAWN_INTERVAL: u64 = 100; // frames
pub const PIPE_GAP: u32 = 100;
pub const PIPE_WIDTH: f64 = 52.0;
pub const PIPE_MIN_HEIGHT: u32 = 50;
pub const PIPE_CAP_HEIGHT: f64 = 20.0;

// Ground scroll
pub const GROUND_STRIPE_SPACING: f64 = 20.0;

// Frame timing
pub const FRAME_INTERVAL_MS: u64 = 16; // ~60 FPS
pub const MAX_CATCH_UP_FRAMES: u32 = 5;

// Config lookup
pub const LOG_FILTER_ENV: &str = "FLAPPY_LOG";

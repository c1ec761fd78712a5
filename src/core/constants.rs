// Playfield (pixels, origin top-left, y grows downward)
pub const BOARD_WIDTH: i32 = 360;
pub const BOARD_HEIGHT: i32 = 640;

// Bird
pub const BIRD_X: i32 = BOARD_WIDTH / 8;
pub const BIRD_START_Y: i32 = BOARD_HEIGHT / 2;
pub const BIRD_WIDTH: i32 = 34;
pub const BIRD_HEIGHT: i32 = 24;

// Pipes
pub const PIPE_WIDTH: i32 = 64;
pub const PIPE_HEIGHT: i32 = 512;
pub const PIPE_GAP: i32 = BOARD_HEIGHT / 4;

// Physics (per tick)
pub const VELOCITY_X: i32 = -4;
pub const GRAVITY: i32 = 1;
pub const JUMP_VELOCITY: i32 = -10;

// Timing
pub const TICK_INTERVAL_MS: u64 = 1000 / 60; // ~60 ticks per second
pub const SPAWN_INTERVAL_MS: u64 = 1500;
/// Longest frame fed to the clock at once; longer stalls are dropped.
pub const MAX_FRAME_DT_MS: u64 = 250;

// Scoring
pub const SCORE_PER_PIPE: f64 = 0.5;

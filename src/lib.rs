//! Sky Bounce - a Doodle Jump-style canvas arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, platform spawning)
//! - `render`: Canvas 2D rendering collaborator (wasm only)
//! - `tuning`: Data-driven game balance

pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod render;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.4;
    /// Vertical velocity applied on bounce and at game start (negative = up)
    pub const JUMP_IMPULSE: f32 = -8.0;

    /// Horizontal speed from keyboard steering
    pub const KEY_STEER_SPEED: f32 = 4.0;
    /// Horizontal speed from touch-drag steering
    pub const TOUCH_STEER_SPEED: f32 = 5.0;

    /// Ball sprite size at load
    pub const BALL_WIDTH: f32 = 46.0;
    pub const BALL_HEIGHT: f32 = 46.0;
    /// Base width used by the proportional resize rule
    pub const BALL_BASE_WIDTH: f32 = 40.0;

    /// Platform sprite size
    pub const PLATFORM_WIDTH: f32 = 80.0;
    pub const PLATFORM_HEIGHT: f32 = 28.0;

    /// Reference board the resize ratios are measured against
    pub const REF_BOARD_WIDTH: f32 = 1080.0;
    pub const REF_BOARD_HEIGHT: f32 = 700.0;

    /// Exclusive upper bound of the per-tick score roll
    pub const SCORE_ROLL_MAX: i64 = 50;

    /// Platforms scroll down while the ball climbs above this board fraction
    pub const SCROLL_LINE_FRACTION: f32 = 0.75;
    /// New platforms spawn at x in [0, width * this fraction)
    pub const SPAWN_X_FRACTION: f32 = 0.75;
    /// The starting platform sits this far above the board bottom
    pub const START_PLATFORM_BOTTOM_OFFSET: f32 = 50.0;
}

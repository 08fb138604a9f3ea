//! Flag Dash - a side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (physics, collisions, world state)
//! - `session`: Score/lives/level bookkeeping and the phase state machine
//! - `renderer`: Scene building and the WebGPU pipeline
//! - `tuning`: Data-driven physics and scoring values
//! - `settings`: Player preferences (LocalStorage on web)

pub mod error;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use session::{Command, HudSnapshot, Session};
pub use settings::Settings;
pub use tuning::{BounceRule, Tuning};

/// Game configuration constants
pub mod consts {
    /// Logical canvas size in pixels
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 450.0;

    /// Player box size
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 32.0;

    /// Default spawn point, used when a level doesn't name one
    pub const SPAWN_X: f32 = 50.0;
    pub const SPAWN_Y: f32 = 300.0;

    /// Coins are picked up inside a square of twice this size
    pub const COIN_RADIUS: f32 = 10.0;

    /// Physics defaults (per tick, not per second)
    pub const GRAVITY: f32 = 0.6;
    pub const JUMP_VELOCITY: f32 = -12.0;
    pub const MOVE_SPEED: f32 = 5.0;
    pub const MAX_FALL_SPEED: f32 = 15.0;
    pub const HORIZONTAL_DAMPING: f32 = 0.8;

    /// Depth below a platform top in which a falling player still lands
    pub const LANDING_BAND: f32 = 20.0;
    /// How far the player's feet may sink past an enemy's top and still stomp
    pub const STOMP_MARGIN: f32 = 10.0;
    pub const STOMP_BOUNCE_VELOCITY: f32 = -8.0;

    /// Falling past this y costs a life
    pub const FALL_LIMIT_Y: f32 = 500.0;
    /// Camera keeps the player this far from the left edge once scrolling
    pub const CAMERA_HALF_WIDTH: f32 = 300.0;

    pub const COIN_POINTS: u32 = 100;
    pub const STOMP_POINTS: u32 = 200;
    pub const STARTING_LIVES: u32 = 3;
}

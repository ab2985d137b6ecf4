//! Brick Breaker - a single-screen ball, paddle and brick wall arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, session state)
//! - `renderer`: Drawing surface contract and frame composition
//! - `platform`: Input mapping and frame drivers (browser/headless)
//! - `highscores`: External high-score store backends
//! - `settings`: Data-driven game tuning

pub mod error;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use highscores::{HighScoreStore, MemoryStore};
pub use settings::{Playfield, Settings};

/// Default game configuration constants
pub mod consts {
    /// Brick wall layout
    pub const BRICK_ROWS: usize = 3;
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_WIDTH: f32 = 125.0;
    pub const BRICK_HEIGHT: f32 = 30.0;
    pub const BRICK_PADDING: f32 = 10.0;

    /// Ball speed along each axis (pixels per tick), also the paddle deflection scale
    pub const BASE_SPEED: f32 = 4.0;
    pub const BALL_RADIUS: f32 = 10.0;
    /// Ball spawn height above the playfield bottom
    pub const BALL_SPAWN_OFFSET: f32 = 50.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 150.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Paddle speed (pixels per tick) while a direction key is held
    pub const PADDLE_SPEED: f32 = 7.0;
    /// Gap between the paddle bottom and the playfield bottom
    pub const PADDLE_BOTTOM_GAP: f32 = 10.0;

    /// Height of the score strip at the top, doubles as the ceiling
    pub const SCOREBOARD_HEIGHT: f32 = 50.0;
    /// Viewport margin trimmed off the playfield so the edge stays visible
    pub const VIEWPORT_MARGIN: f32 = 10.0;

    /// Store key for the persisted best score
    pub const HIGH_SCORE_KEY: &str = "highScore";
}

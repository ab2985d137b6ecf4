//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no delta-time scaling
//! - No randomness
//! - Stable iteration order (row-major bricks)
//! - No rendering or platform dependencies

pub mod ball;
pub mod bricks;
pub mod collision;
pub mod geometry;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use bricks::{Brick, BrickGrid, BrickId, BrickStatus, GridLayout};
pub use collision::{Resolution, paddle_deflection, resolve};
pub use geometry::{Rect, circle_intersects_rect};
pub use paddle::{Paddle, PaddleCommand};
pub use state::{GameEvent, GamePhase, GameSession, GameState, Outcome};
pub use tick::tick;

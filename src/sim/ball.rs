//! Ball motion
//!
//! Constant velocity, no gravity or drag. One integration step per tick,
//! no substepping, so a fast ball can tunnel through a thin brick row.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Advance one tick
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn reflect_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    #[inline]
    pub fn reflect_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

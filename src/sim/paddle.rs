//! The player's paddle
//!
//! Input only ever sets the horizontal velocity. Position changes happen in
//! `integrate`, which hard-clamps the paddle inside the playfield.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// Discrete paddle input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleCommand {
    Left,
    Right,
    Stop,
}

/// The paddle; y never changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal velocity, one of {-speed, 0, +speed}
    pub dx: f32,
    pub speed: f32,
}

impl Paddle {
    pub fn new(pos: Vec2, width: f32, height: f32, speed: f32) -> Self {
        Self {
            pos,
            width,
            height,
            dx: 0.0,
            speed,
        }
    }

    /// Apply an input command. No acceleration, the change is instant.
    pub fn set_velocity(&mut self, command: PaddleCommand) {
        self.dx = match command {
            PaddleCommand::Left => -self.speed,
            PaddleCommand::Right => self.speed,
            PaddleCommand::Stop => 0.0,
        };
    }

    /// Move one tick and clamp to [0, playfield_width - width]. Velocity is kept.
    pub fn integrate(&mut self, playfield_width: f32) {
        self.pos.x += self.dx;
        let max_x = (playfield_width - self.width).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: Vec2::new(self.width, self.height),
        }
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn paddle_at(x: f32) -> Paddle {
        Paddle::new(Vec2::new(x, 570.0), 150.0, 20.0, 7.0)
    }

    #[test]
    fn test_set_velocity() {
        let mut paddle = paddle_at(100.0);
        paddle.set_velocity(PaddleCommand::Left);
        assert_eq!(paddle.dx, -7.0);
        paddle.set_velocity(PaddleCommand::Right);
        assert_eq!(paddle.dx, 7.0);
        paddle.set_velocity(PaddleCommand::Stop);
        assert_eq!(paddle.dx, 0.0);
    }

    #[test]
    fn test_clamp_right_wall() {
        let width = 800.0;
        let mut paddle = paddle_at(width - 150.0 + 5.0);
        paddle.dx = 7.0;
        paddle.integrate(width);
        assert_eq!(paddle.pos.x, width - 150.0);
        // Velocity survives the wall
        assert_eq!(paddle.dx, 7.0);
    }

    #[test]
    fn test_clamp_left_wall_then_reverse() {
        let mut paddle = paddle_at(3.0);
        paddle.set_velocity(PaddleCommand::Left);
        paddle.integrate(800.0);
        assert_eq!(paddle.pos.x, 0.0);
        paddle.set_velocity(PaddleCommand::Right);
        paddle.integrate(800.0);
        assert_eq!(paddle.pos.x, 7.0);
    }

    #[test]
    fn test_y_is_fixed() {
        let mut paddle = paddle_at(100.0);
        paddle.set_velocity(PaddleCommand::Right);
        for _ in 0..10 {
            paddle.integrate(800.0);
        }
        assert_eq!(paddle.pos.y, 570.0);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_bounds(
            start in 0.0f32..650.0,
            commands in proptest::collection::vec(0u8..3, 0..200),
        ) {
            let mut paddle = paddle_at(start);
            for c in commands {
                let command = match c {
                    0 => PaddleCommand::Left,
                    1 => PaddleCommand::Right,
                    _ => PaddleCommand::Stop,
                };
                paddle.set_velocity(command);
                paddle.integrate(800.0);
                prop_assert!(paddle.pos.x >= 0.0);
                prop_assert!(paddle.pos.x <= 650.0);
            }
        }
    }
}

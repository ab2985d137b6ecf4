//! Keyboard mapping and the demo autopilot

use crate::sim::ball::Ball;
use crate::sim::paddle::{Paddle, PaddleCommand};

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Paddle(PaddleCommand),
    /// Start a new session once the current one is over
    Restart,
}

/// Map a key-down (DOM `KeyboardEvent.key` names)
pub fn key_down(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowLeft" => Some(KeyAction::Paddle(PaddleCommand::Left)),
        "ArrowRight" => Some(KeyAction::Paddle(PaddleCommand::Right)),
        "Enter" => Some(KeyAction::Restart),
        _ => None,
    }
}

/// Any key release stops the paddle
pub fn key_up(_key: &str) -> PaddleCommand {
    PaddleCommand::Stop
}

/// Demo controller: keep the paddle under the ball.
///
/// Aims a quarter paddle width behind the ball's travel so it comes back
/// off-center and sweeps across the wall instead of bouncing straight.
pub fn autopilot(ball: &Ball, paddle: &Paddle) -> PaddleCommand {
    let aim = paddle.width * 0.25 * ball.vel.x.signum();
    let target = ball.pos.x + aim;
    let center = paddle.center_x();
    let deadzone = paddle.speed;

    if target < center - deadzone {
        PaddleCommand::Left
    } else if target > center + deadzone {
        PaddleCommand::Right
    } else {
        PaddleCommand::Stop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_down("ArrowLeft"), Some(KeyAction::Paddle(PaddleCommand::Left)));
        assert_eq!(key_down("ArrowRight"), Some(KeyAction::Paddle(PaddleCommand::Right)));
        assert_eq!(key_down("Enter"), Some(KeyAction::Restart));
        assert_eq!(key_down("a"), None);
        assert_eq!(key_up("ArrowLeft"), PaddleCommand::Stop);
        assert_eq!(key_up("Shift"), PaddleCommand::Stop);
    }

    #[test]
    fn test_autopilot_follows_ball() {
        let paddle = Paddle::new(Vec2::new(300.0, 570.0), 150.0, 20.0, 7.0);
        let right = Ball::new(Vec2::new(700.0, 300.0), Vec2::new(4.0, 4.0), 10.0);
        let left = Ball::new(Vec2::new(50.0, 300.0), Vec2::new(-4.0, 4.0), 10.0);
        assert_eq!(autopilot(&right, &paddle), PaddleCommand::Right);
        assert_eq!(autopilot(&left, &paddle), PaddleCommand::Left);

        // Ball dead ahead after the aim offset
        let ahead = Ball::new(Vec2::new(375.0 - 37.5, 300.0), Vec2::new(4.0, 4.0), 10.0);
        assert_eq!(autopilot(&ahead, &paddle), PaddleCommand::Stop);
    }
}

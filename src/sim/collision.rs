//! Per-tick collision resolution
//!
//! Runs in a fixed order: side walls, ceiling, floor, paddle, bricks, win check.
//! Bounces flip a velocity sign. The paddle replaces horizontal speed instead,
//! steering the ball by where it lands.

use super::paddle::Paddle;
use super::state::{GameEvent, GameState};

/// What the resolver decided for this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Keep playing
    Continue,
    /// Ball went through the floor
    Lost,
    /// Last brick destroyed
    Won,
}

/// Horizontal speed after a paddle hit.
///
/// `hit_pos` runs 0 (left edge) to 1 (right edge); the center gives 0,
/// the edges give -/+ `base_speed`.
pub fn paddle_deflection(ball_x: f32, paddle: &Paddle, base_speed: f32) -> f32 {
    let hit_pos = (ball_x - paddle.pos.x) / paddle.width;
    let relative = hit_pos - 0.5;
    relative * 2.0 * base_speed
}

/// Paddle contact: ball center within the paddle span and bottom edge past its top
fn touches_paddle(state: &GameState) -> bool {
    let ball = &state.ball;
    let paddle = &state.paddle;
    ball.pos.x > paddle.pos.x
        && ball.pos.x < paddle.pos.x + paddle.width
        && ball.bottom() > paddle.pos.y
}

/// Resolve all contacts for the current ball position
pub fn resolve(state: &mut GameState) -> Resolution {
    let playfield = state.playfield;

    // Side walls
    if state.ball.left() < 0.0 || state.ball.right() > playfield.width {
        state.ball.reflect_x();
        state.events.push(GameEvent::WallBounce);
    }

    // Scoreboard strip acts as the ceiling
    if state.ball.top() < playfield.ceiling {
        state.ball.reflect_y();
        state.events.push(GameEvent::CeilingBounce);
    }

    // Floor ends the session, no bounce
    if state.ball.bottom() > playfield.height {
        state.events.push(GameEvent::Lost);
        return Resolution::Lost;
    }

    if touches_paddle(state) {
        let dx = paddle_deflection(state.ball.pos.x, &state.paddle, state.base_speed);
        state.ball.vel.x = dx;
        state.ball.reflect_y();
        state.events.push(GameEvent::PaddleHit { dx });
        log::debug!("Paddle hit at x={:.1}, dx={:.2}", state.ball.pos.x, dx);
    }

    // Every overlapped brick reflects independently; an even number of hits cancels out
    let center = state.ball.pos;
    let hits: Vec<_> = state
        .bricks
        .active()
        .filter(|b| state.bricks.rect(b).contains_point(center))
        .map(|b| b.id)
        .collect();
    for id in hits {
        if state.bricks.destroy(id) {
            state.ball.reflect_y();
            state.score += 1;
            state.events.push(GameEvent::BrickDestroyed {
                row: id.row,
                col: id.col,
            });
            log::debug!("Brick ({}, {}) destroyed, score {}", id.row, id.col, state.score);
        }
    }

    if state.score as usize == state.bricks.len() {
        state.events.push(GameEvent::Won);
        return Resolution::Won;
    }

    Resolution::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Playfield, Settings};
    use crate::sim::bricks::BrickId;
    use glam::Vec2;

    fn state() -> GameState {
        GameState::new(&Settings::default(), Playfield::new(1600.0, 900.0, 50.0))
    }

    #[test]
    fn test_right_wall_reflects_x_only() {
        let mut s = state();
        let r = s.ball.radius;
        s.ball.pos = Vec2::new(s.playfield.width - r + 1.0, 500.0);
        s.ball.vel = Vec2::new(4.0, -4.0);

        assert_eq!(resolve(&mut s), Resolution::Continue);
        assert_eq!(s.ball.vel, Vec2::new(-4.0, -4.0));
        assert_eq!(s.events, vec![GameEvent::WallBounce]);
    }

    #[test]
    fn test_left_wall_reflects() {
        let mut s = state();
        s.ball.pos = Vec2::new(5.0, 500.0);
        s.ball.vel = Vec2::new(-4.0, 4.0);
        resolve(&mut s);
        assert_eq!(s.ball.vel, Vec2::new(4.0, 4.0));
    }

    #[test]
    fn test_ceiling_is_scoreboard_edge() {
        let mut s = state();
        // Left of the brick wall, top edge just inside the strip
        s.ball.pos = Vec2::new(50.0, s.playfield.ceiling + s.ball.radius - 1.0);
        s.ball.vel = Vec2::new(0.0, -4.0);
        resolve(&mut s);
        assert_eq!(s.ball.vel, Vec2::new(0.0, 4.0));
        assert_eq!(s.events, vec![GameEvent::CeilingBounce]);
    }

    #[test]
    fn test_floor_loses_without_bounce() {
        let mut s = state();
        s.ball.pos = Vec2::new(20.0, s.playfield.height - 5.0);
        s.ball.vel = Vec2::new(4.0, 4.0);
        assert_eq!(resolve(&mut s), Resolution::Lost);
        assert_eq!(s.ball.vel, Vec2::new(4.0, 4.0));
        assert_eq!(s.bricks.count_active(), 30);
    }

    #[test]
    fn test_deflection_law() {
        let paddle = Paddle::new(Vec2::new(100.0, 500.0), 150.0, 20.0, 7.0);
        assert_eq!(paddle_deflection(175.0, &paddle, 4.0), 0.0);
        assert_eq!(paddle_deflection(100.0, &paddle, 4.0), -4.0);
        assert_eq!(paddle_deflection(250.0, &paddle, 4.0), 4.0);
        assert_eq!(paddle_deflection(137.5, &paddle, 4.0), -2.0);
    }

    #[test]
    fn test_paddle_center_hit_goes_straight_up() {
        let mut s = state();
        s.ball.pos = Vec2::new(s.paddle.center_x(), s.paddle.pos.y - s.ball.radius + 2.0);
        s.ball.vel = Vec2::new(3.0, 4.0);
        resolve(&mut s);
        assert_eq!(s.ball.vel, Vec2::new(0.0, -4.0));
        assert_eq!(s.events, vec![GameEvent::PaddleHit { dx: 0.0 }]);
    }

    #[test]
    fn test_paddle_quarter_hit_steers_left() {
        let mut s = state();
        s.ball.pos = Vec2::new(
            s.paddle.pos.x + s.paddle.width * 0.25,
            s.paddle.pos.y - s.ball.radius + 2.0,
        );
        s.ball.vel = Vec2::new(3.0, 4.0);
        resolve(&mut s);
        assert_eq!(s.ball.vel, Vec2::new(-2.0, -4.0));
        assert_eq!(s.events, vec![GameEvent::PaddleHit { dx: -2.0 }]);
    }

    #[test]
    fn test_paddle_miss_outside_span() {
        let mut s = state();
        s.ball.pos = Vec2::new(s.paddle.pos.x - 1.0, s.paddle.pos.y);
        s.ball.vel = Vec2::new(0.0, 4.0);
        resolve(&mut s);
        assert_eq!(s.ball.vel, Vec2::new(0.0, 4.0));
    }

    #[test]
    fn test_brick_hit_scores_and_reflects() {
        let mut s = state();
        let target = s.bricks.get(BrickId { row: 2, col: 3 }).unwrap().clone();
        s.ball.pos = target.pos + s.bricks.brick_size() * 0.5;
        s.ball.vel = Vec2::new(4.0, -4.0);

        assert_eq!(resolve(&mut s), Resolution::Continue);
        assert_eq!(s.score, 1);
        assert_eq!(s.ball.vel.y, 4.0);
        assert_eq!(s.bricks.count_active(), 29);
        assert!(!s.bricks.get(target.id).unwrap().is_active());
    }

    #[test]
    fn test_destroyed_brick_is_not_scored_again() {
        let mut s = state();
        let target = s.bricks.get(BrickId { row: 1, col: 1 }).unwrap().clone();
        s.ball.pos = target.pos + s.bricks.brick_size() * 0.5;
        s.ball.vel = Vec2::new(0.0, -4.0);
        resolve(&mut s);
        s.events.clear();
        resolve(&mut s);
        assert_eq!(s.score, 1);
        assert!(s.events.is_empty());
    }

    #[test]
    fn test_two_overlapping_bricks_cancel_reflection() {
        // Negative padding makes neighbouring bricks overlap
        let settings = Settings {
            brick_padding: -2.0,
            ..Settings::default()
        };
        let mut s = GameState::new(&settings, Playfield::new(1600.0, 900.0, 50.0));
        let right = s.bricks.get(BrickId { row: 0, col: 1 }).unwrap().clone();
        s.ball.pos = Vec2::new(right.pos.x + 1.0, right.pos.y + 20.0);
        s.ball.vel = Vec2::new(4.0, -4.0);

        resolve(&mut s);
        assert_eq!(s.score, 2);
        assert_eq!(s.ball.vel.y, -4.0);
    }

    #[test]
    fn test_last_brick_wins() {
        let settings = Settings {
            brick_rows: 1,
            brick_cols: 1,
            ..Settings::default()
        };
        let mut s = GameState::new(&settings, Playfield::new(800.0, 600.0, 50.0));
        let brick = s.bricks.get(BrickId { row: 0, col: 0 }).unwrap().clone();
        s.ball.pos = brick.pos + s.bricks.brick_size() * 0.5;

        assert_eq!(resolve(&mut s), Resolution::Won);
        assert_eq!(s.score, 1);
        assert_eq!(s.bricks.count_active(), 0);
        assert_eq!(s.events.last(), Some(&GameEvent::Won));
    }
}

//! Single simulation step
//!
//! One tick per displayed frame with a fixed per-tick velocity, so simulation
//! speed follows the display refresh rate.

use super::collision::{Resolution, resolve};
use super::state::{GamePhase, GameState, Outcome};

/// Advance the game state by one tick: ball, then paddle, then collisions.
///
/// Once the phase is `Over` nothing is mutated.
pub fn tick(state: &mut GameState) -> GamePhase {
    if state.phase.is_over() {
        return state.phase;
    }

    state.events.clear();
    state.time_ticks += 1;

    state.ball.integrate();
    state.paddle.integrate(state.playfield.width);

    match resolve(state) {
        Resolution::Continue => {}
        Resolution::Lost => state.phase = GamePhase::Over(Outcome::Loss),
        Resolution::Won => state.phase = GamePhase::Over(Outcome::Win),
    }

    state.phase
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Playfield, Settings};
    use crate::sim::state::GameEvent;
    use glam::Vec2;

    fn state() -> GameState {
        GameState::new(&Settings::default(), Playfield::new(1600.0, 900.0, 50.0))
    }

    #[test]
    fn test_wall_reflection_over_one_tick() {
        let mut s = state();
        let r = s.ball.radius;
        s.ball.pos = Vec2::new(s.playfield.width - r + 1.0, 500.0);
        s.ball.vel = Vec2::new(4.0, -4.0);

        tick(&mut s);
        assert_eq!(s.ball.vel, Vec2::new(-4.0, -4.0));
        assert_eq!(s.ball.pos, Vec2::new(s.playfield.width - r + 5.0, 496.0));
    }

    #[test]
    fn test_ball_falls_through_floor() {
        let mut s = state();
        s.ball.pos = Vec2::new(40.0, s.playfield.height - s.ball.radius - 2.0);
        s.ball.vel = Vec2::new(4.0, 4.0);

        assert_eq!(tick(&mut s), GamePhase::Over(Outcome::Loss));
        assert_eq!(s.bricks.count_active(), 30);
        assert_eq!(s.events, vec![GameEvent::Lost]);
    }

    #[test]
    fn test_over_is_terminal() {
        let mut s = state();
        s.phase = GamePhase::Over(Outcome::Loss);
        let ball = s.ball.clone();
        let ticks = s.time_ticks;
        assert_eq!(tick(&mut s), GamePhase::Over(Outcome::Loss));
        assert_eq!(s.ball, ball);
        assert_eq!(s.time_ticks, ticks);
    }

    #[test]
    fn test_events_cleared_each_tick() {
        let mut s = state();
        s.ball.pos = Vec2::new(s.playfield.width - s.ball.radius + 1.0, 500.0);
        s.ball.vel = Vec2::new(4.0, -4.0);
        tick(&mut s);
        assert_eq!(s.events, vec![GameEvent::WallBounce]);
        s.ball.pos = Vec2::new(800.0, 500.0);
        tick(&mut s);
        assert!(s.events.is_empty());
    }

    #[test]
    fn test_free_flight_from_spawn() {
        let mut s = state();
        let start = s.ball.pos;
        for _ in 0..10 {
            tick(&mut s);
        }
        assert_eq!(s.ball.pos, start + Vec2::new(40.0, -40.0));
        assert_eq!(s.phase, GamePhase::Running);
        assert_eq!(s.time_ticks, 10);
    }
}

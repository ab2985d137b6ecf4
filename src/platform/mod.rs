//! Platform abstraction layer
//!
//! The simulation is driven one tick per displayed frame. Drivers here call
//! `run_frame` and stop rescheduling once it returns `Halt`:
//! - Browser: `requestAnimationFrame` (WASM only)
//! - Headless: a plain loop, used by the native binary and tests

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{KeyAction, autopilot, key_down, key_up};

use serde::{Deserialize, Serialize};

use crate::highscores::HighScoreStore;
use crate::renderer::{DrawSurface, draw_frame, draw_game_over};
use crate::sim::state::{GamePhase, GameSession, Outcome};

/// Whether the driver should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Halt,
}

/// One frame: tick while running, render, then the overlay once the session is over
pub fn run_frame<S: HighScoreStore>(
    session: &mut GameSession<S>,
    surface: &mut impl DrawSurface,
) -> FrameStatus {
    let phase = session.tick();
    draw_frame(session.state(), surface);

    if phase.is_over() {
        draw_game_over(session.state(), surface);
        return FrameStatus::Halt;
    }
    FrameStatus::Continue
}

/// Summary of a headless run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlessReport {
    pub ticks: u64,
    pub score: u32,
    pub high_score: u32,
    /// `None` if the tick budget ran out first
    pub outcome: Option<Outcome>,
}

/// Drive frames synchronously until the session ends or `max_ticks` frames ran
pub fn run_headless<S: HighScoreStore>(
    session: &mut GameSession<S>,
    surface: &mut impl DrawSurface,
    max_ticks: u64,
    use_autopilot: bool,
) -> HeadlessReport {
    for _ in 0..max_ticks {
        if use_autopilot {
            let command = autopilot(&session.state().ball, &session.state().paddle);
            session.apply_input(command);
        }
        if run_frame(session, surface) == FrameStatus::Halt {
            break;
        }
    }

    let state = session.state();
    let outcome = match state.phase {
        GamePhase::Over(outcome) => Some(outcome),
        GamePhase::Running => None,
    };
    log::info!(
        "Headless run finished after {} ticks: score {}, outcome {:?}",
        state.time_ticks,
        state.score,
        outcome
    );

    HeadlessReport {
        ticks: state.time_ticks,
        score: state.score,
        high_score: state.high_score,
        outcome,
    }
}

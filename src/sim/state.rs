//! Game state and session lifecycle
//!
//! `GameState` is the pure, serializable simulation data. `GameSession` owns
//! one playthrough plus the high-score store it reports to.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bricks::{BrickGrid, GridLayout};
use super::paddle::{Paddle, PaddleCommand};
use super::tick::tick;
use crate::highscores::HighScoreStore;
use crate::settings::{Playfield, Settings};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    /// Terminal
    Over(Outcome),
}

impl GamePhase {
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::Over(_))
    }
}

/// Things that happened during the last tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce,
    CeilingBounce,
    PaddleHit { dx: f32 },
    BrickDestroyed { row: usize, col: usize },
    Won,
    Lost,
    NewHighScore { score: u32 },
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub playfield: Playfield,
    /// BASE_SPEED, used for paddle deflection
    pub base_speed: f32,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    /// Bricks destroyed this session
    pub score: u32,
    /// Best score as known at session start (updated on a record finish)
    pub high_score: u32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh state: ball above the paddle heading up-right, full brick wall
    pub fn new(settings: &Settings, playfield: Playfield) -> Self {
        let ball = Ball::new(
            Vec2::new(
                playfield.width / 2.0,
                playfield.height - settings.ball_spawn_offset,
            ),
            Vec2::new(settings.ball_speed, -settings.ball_speed),
            settings.ball_radius,
        );

        let paddle = Paddle::new(
            Vec2::new(
                playfield.width / 2.0 - settings.paddle_width / 2.0,
                settings.paddle_top(&playfield),
            ),
            settings.paddle_width,
            settings.paddle_height,
            settings.paddle_speed,
        );

        let bricks = BrickGrid::create(GridLayout {
            rows: settings.brick_rows,
            cols: settings.brick_cols,
            brick_width: settings.brick_width,
            brick_height: settings.brick_height,
            padding: settings.brick_padding,
            playfield_width: playfield.width,
            top_offset: playfield.ceiling,
        });

        Self {
            playfield,
            base_speed: settings.ball_speed,
            ball,
            paddle,
            bricks,
            score: 0,
            high_score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
            events: Vec::new(),
        }
    }
}

/// One playthrough plus its high-score store
pub struct GameSession<S: HighScoreStore> {
    settings: Settings,
    state: GameState,
    store: S,
}

impl<S: HighScoreStore> GameSession<S> {
    /// Start a session; the stored high score is read once here (absent = 0)
    pub fn new(settings: Settings, playfield: Playfield, store: S) -> Self {
        for warning in settings.validate(&playfield) {
            log::warn!("Settings: {}", warning);
        }

        let mut session = Self {
            state: GameState::new(&settings, playfield),
            settings,
            store,
        };
        session.state.high_score = session.load_high_score();

        log::info!(
            "Session started: {:.0}x{:.0} playfield, {} bricks, high score {}",
            playfield.width,
            playfield.height,
            session.state.bricks.len(),
            session.state.high_score
        );
        session
    }

    fn load_high_score(&self) -> u32 {
        self.store.get(&self.settings.high_score_key).unwrap_or(0)
    }

    /// Rebuild ball, paddle and bricks for a new playthrough
    pub fn restart(&mut self) {
        let playfield = self.state.playfield;
        self.state = GameState::new(&self.settings, playfield);
        self.state.high_score = self.load_high_score();
        log::info!("Session restarted, high score {}", self.state.high_score);
    }

    /// Route an input event to the paddle. Safe between any two ticks.
    pub fn apply_input(&mut self, command: PaddleCommand) {
        self.state.paddle.set_velocity(command);
    }

    /// Advance one simulation step. A no-op once the session is over.
    pub fn tick(&mut self) -> GamePhase {
        let was_running = self.state.phase == GamePhase::Running;
        let phase = tick(&mut self.state);

        if was_running {
            if let GamePhase::Over(outcome) = phase {
                self.finish(outcome);
            }
        }
        phase
    }

    /// One-time bookkeeping on entering Over
    fn finish(&mut self, outcome: Outcome) {
        let score = self.state.score;
        log::info!(
            "Session over: {:?} with score {} after {} ticks",
            outcome,
            score,
            self.state.time_ticks
        );

        if score > self.state.high_score {
            self.state.high_score = score;
            self.state.events.push(GameEvent::NewHighScore { score });
            match self.store.set(&self.settings.high_score_key, score) {
                Ok(()) => log::info!("New high score {} saved", score),
                Err(e) => log::warn!("Failed to save high score {}: {}", score, e),
            }
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for drivers and tests
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

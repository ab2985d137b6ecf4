//! Game settings and playfield dimensions
//!
//! Persisted as JSON (LocalStorage on web, a file on native).

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::geometry::{Rect, circle_intersects_rect};

/// Game tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Brick wall ===
    pub brick_rows: usize,
    pub brick_cols: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,

    // === Ball ===
    /// BASE_SPEED: initial per-axis speed and paddle deflection scale
    pub ball_speed: f32,
    pub ball_radius: f32,
    pub ball_spawn_offset: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_bottom_gap: f32,

    // === Layout ===
    pub scoreboard_height: f32,
    pub viewport_margin: f32,

    /// Key used with the high-score store
    pub high_score_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,

            ball_speed: BASE_SPEED,
            ball_radius: BALL_RADIUS,
            ball_spawn_offset: BALL_SPAWN_OFFSET,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_bottom_gap: PADDLE_BOTTOM_GAP,

            scoreboard_height: SCOREBOARD_HEIGHT,
            viewport_margin: VIEWPORT_MARGIN,

            high_score_key: HIGH_SCORE_KEY.to_string(),
        }
    }
}

impl Settings {
    /// Total number of bricks in the wall
    pub fn brick_count(&self) -> usize {
        self.brick_rows * self.brick_cols
    }

    /// Horizontal extent of the brick wall (no padding on the outer edges)
    pub fn grid_width(&self) -> f32 {
        self.brick_cols as f32 * (self.brick_width + self.brick_padding) - self.brick_padding
    }

    /// Bottom edge of the lowest brick row
    pub fn grid_bottom(&self) -> f32 {
        self.scoreboard_height
            + self.brick_padding
            + self.brick_rows as f32 * (self.brick_height + self.brick_padding)
            - self.brick_padding
    }

    /// Paddle top edge for a playfield
    pub fn paddle_top(&self, playfield: &Playfield) -> f32 {
        playfield.height - self.paddle_height - self.paddle_bottom_gap
    }

    /// Sanity-check the layout against a playfield. Problems are reported, never fatal.
    pub fn validate(&self, playfield: &Playfield) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.brick_count() == 0 {
            warnings.push("brick wall is empty, the session is won on the first tick".to_string());
        }
        if self.grid_width() > playfield.width {
            warnings.push(format!(
                "brick wall ({:.0}px) is wider than the playfield ({:.0}px)",
                self.grid_width(),
                playfield.width
            ));
        }
        let paddle_top = self.paddle_top(playfield);
        if self.grid_bottom() >= paddle_top {
            warnings.push("brick wall reaches down to the paddle row".to_string());
        }
        if self.paddle_width > playfield.width {
            warnings.push("paddle is wider than the playfield".to_string());
        }

        let paddle = Rect::new(
            playfield.width / 2.0 - self.paddle_width / 2.0,
            paddle_top,
            self.paddle_width,
            self.paddle_height,
        );
        let spawn = glam::Vec2::new(playfield.width / 2.0, playfield.height - self.ball_spawn_offset);
        if circle_intersects_rect(spawn, self.ball_radius, &paddle) {
            warnings.push("ball spawns overlapping the paddle".to_string());
        }

        warnings
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "brick_breaker_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring malformed settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Save settings to a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> crate::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// The rectangular simulation area (viewport minus margin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
    /// Scoreboard strip height; the ball's ceiling
    pub ceiling: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32, ceiling: f32) -> Self {
        Self {
            width,
            height,
            ceiling,
        }
    }

    /// Derive the playfield from the viewport size, read once at startup
    pub fn from_viewport(viewport_width: f32, viewport_height: f32, settings: &Settings) -> Self {
        Self::new(
            (viewport_width - settings.viewport_margin).max(0.0),
            (viewport_height - settings.viewport_margin).max(0.0),
            settings.scoreboard_height,
        )
    }
}

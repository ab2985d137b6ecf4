//! Frame composition over an opaque drawing surface
//!
//! The simulation never depends on what the surface does. A texture that is
//! not loaded yet only costs the brick its image; the outline and collisions
//! stay the same.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recorder;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recorder::{DrawCommand, RecordingSurface};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::geometry::Rect;
use crate::sim::state::{GamePhase, GameState, Outcome};

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const SCOREBOARD: Color = Color::rgb(0x33, 0x33, 0x33);
    pub const BALL: Color = Color::rgb(0x00, 0xff, 0x00);
    pub const PADDLE: Color = Color::rgb(0xff, 0x00, 0x00);

    /// CSS color string
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f32 / 255.0
            )
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Images the game blits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Texture {
    Brick,
}

/// Drawing primitives in playfield pixel coordinates
pub trait DrawSurface {
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn fill_text(&mut self, text: &str, pos: Vec2, size_px: u32, align: TextAlign, color: Color);
    /// Whether the image has finished loading
    fn texture_ready(&self, texture: Texture) -> bool;
    fn draw_texture(&mut self, texture: Texture, rect: Rect);
}

/// Scoreboard text size
const HUD_FONT_PX: u32 = 20;
/// Text inset from the strip edges
const HUD_INSET: f32 = 10.0;
/// Baseline of the scoreboard text
const HUD_BASELINE: f32 = 30.0;
const OVERLAY_FONT_PX: u32 = 50;

/// Draw one full frame: scoreboard, bricks, ball, paddle
pub fn draw_frame(state: &GameState, surface: &mut impl DrawSurface) {
    surface.clear();
    draw_scoreboard(state, surface);
    draw_bricks(state, surface);

    surface.fill_circle(state.ball.pos, state.ball.radius, Color::BALL);

    let paddle = state.paddle.rect();
    surface.fill_rect(paddle, Color::PADDLE);
    surface.stroke_rect(paddle, Color::WHITE);
}

fn draw_scoreboard(state: &GameState, surface: &mut impl DrawSurface) {
    let width = state.playfield.width;
    surface.fill_rect(
        Rect::new(0.0, 0.0, width, state.playfield.ceiling),
        Color::SCOREBOARD,
    );
    surface.fill_text(
        &format!("Score: {}", state.score),
        Vec2::new(HUD_INSET, HUD_BASELINE),
        HUD_FONT_PX,
        TextAlign::Left,
        Color::WHITE,
    );
    surface.fill_text(
        &format!("High score: {}", state.high_score),
        Vec2::new(width - HUD_INSET, HUD_BASELINE),
        HUD_FONT_PX,
        TextAlign::Right,
        Color::WHITE,
    );
}

fn draw_bricks(state: &GameState, surface: &mut impl DrawSurface) {
    let textured = surface.texture_ready(Texture::Brick);
    state.bricks.for_each_active(|brick| {
        let rect = state.bricks.rect(brick);
        if textured {
            surface.draw_texture(Texture::Brick, rect);
        }
        surface.stroke_rect(rect, Color::WHITE);
    });
}

/// Terminal overlay; does nothing while the session is running
pub fn draw_game_over(state: &GameState, surface: &mut impl DrawSurface) {
    let text = match state.phase {
        GamePhase::Running => return,
        GamePhase::Over(Outcome::Win) => "YOU WIN!",
        GamePhase::Over(Outcome::Loss) => "GAME OVER",
    };
    surface.fill_text(
        text,
        Vec2::new(state.playfield.width / 2.0, state.playfield.height / 2.0),
        OVERLAY_FONT_PX,
        TextAlign::Center,
        Color::WHITE,
    );
}

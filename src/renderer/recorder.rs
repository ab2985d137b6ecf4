//! Headless drawing surface that records draw calls

use std::collections::HashSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{Color, DrawSurface, TextAlign, Texture};
use crate::sim::geometry::Rect;

/// A recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear,
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color },
    FillCircle { center: Vec2, radius: f32, color: Color },
    Text {
        text: String,
        pos: Vec2,
        size_px: u32,
        align: TextAlign,
        color: Color,
    },
    Texture { texture: Texture, rect: Rect },
}

/// Keeps the draw calls since the last `clear`
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    loaded: HashSet<Texture>,
    frames: u64,
}

impl RecordingSurface {
    /// Surface with no textures loaded
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_textures(textures: &[Texture]) -> Self {
        Self {
            loaded: textures.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of `clear` calls, i.e. frames started
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    pub fn last_text(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::StrokeRect { rect, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, size_px: u32, align: TextAlign, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            size_px,
            align,
            color,
        });
    }

    fn texture_ready(&self, texture: Texture) -> bool {
        self.loaded.contains(&texture)
    }

    fn draw_texture(&mut self, texture: Texture, rect: Rect) {
        self.commands.push(DrawCommand::Texture { texture, rect });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_starts_new_frame() {
        let mut surface = RecordingSurface::new();
        surface.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        surface.clear();
        surface.fill_circle(Vec2::ZERO, 2.0, Color::BALL);
        assert_eq!(surface.commands().len(), 2);
        assert_eq!(surface.frames(), 1);
    }

    #[test]
    fn test_commands_serialize_tagged() {
        let json = serde_json::to_string(&DrawCommand::Clear).unwrap();
        assert_eq!(json, r#"{"op":"clear"}"#);
    }
}

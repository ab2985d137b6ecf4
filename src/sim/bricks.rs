//! The destructible brick wall
//!
//! Bricks never move. Each one goes Active -> Destroyed at most once.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// Brick status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickStatus {
    Active,
    Destroyed,
}

/// Grid coordinates of a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrickId {
    pub row: usize,
    pub col: usize,
}

/// A single brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub id: BrickId,
    pub pos: Vec2,
    pub status: BrickStatus,
}

impl Brick {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == BrickStatus::Active
    }
}

/// Layout parameters for a brick wall
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub padding: f32,
    pub playfield_width: f32,
    /// Top of the area below the scoreboard strip
    pub top_offset: f32,
}

/// Rows x columns of bricks, stored row-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: usize,
    cols: usize,
    brick_size: Vec2,
    bricks: Vec<Brick>,
    active: usize,
}

impl BrickGrid {
    /// Lay out a fully active wall, horizontally centered, one padding below `top_offset`
    pub fn create(layout: GridLayout) -> Self {
        let GridLayout {
            rows,
            cols,
            brick_width,
            brick_height,
            padding,
            playfield_width,
            top_offset,
        } = layout;

        let total_width = cols as f32 * (brick_width + padding) - padding;
        let left = (playfield_width - total_width) / 2.0;

        let mut bricks = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                bricks.push(Brick {
                    id: BrickId { row, col },
                    pos: Vec2::new(
                        left + col as f32 * (brick_width + padding),
                        top_offset + padding + row as f32 * (brick_height + padding),
                    ),
                    status: BrickStatus::Active,
                });
            }
        }

        Self {
            rows,
            cols,
            brick_size: Vec2::new(brick_width, brick_height),
            active: bricks.len(),
            bricks,
        }
    }

    /// Total bricks, active or not
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn brick_size(&self) -> Vec2 {
        self.brick_size
    }

    pub fn get(&self, id: BrickId) -> Option<&Brick> {
        if id.row >= self.rows || id.col >= self.cols {
            return None;
        }
        self.bricks.get(id.row * self.cols + id.col)
    }

    /// Screen rectangle of a brick
    pub fn rect(&self, brick: &Brick) -> Rect {
        Rect {
            pos: brick.pos,
            size: self.brick_size,
        }
    }

    /// Iterate active bricks in row-major order
    pub fn active(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.is_active())
    }

    pub fn for_each_active(&self, mut f: impl FnMut(&Brick)) {
        for brick in self.active() {
            f(brick);
        }
    }

    pub fn count_active(&self) -> usize {
        self.active
    }

    /// Mark a brick destroyed. Returns false if it was already destroyed (or unknown).
    pub fn destroy(&mut self, id: BrickId) -> bool {
        if id.row >= self.rows || id.col >= self.cols {
            return false;
        }
        let brick = &mut self.bricks[id.row * self.cols + id.col];
        if brick.status == BrickStatus::Destroyed {
            return false;
        }
        brick.status = BrickStatus::Destroyed;
        self.active -= 1;
        true
    }

    /// Bounding box of the whole wall
    pub fn bounds(&self) -> Option<Rect> {
        let first = self.bricks.first()?;
        Some(
            self.bricks
                .iter()
                .skip(1)
                .fold(self.rect(first), |acc, b| acc.union(&self.rect(b))),
        )
    }
}

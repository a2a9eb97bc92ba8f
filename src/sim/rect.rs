//! Axis-aligned rectangles
//!
//! Origin is the bottom-left corner; y grows upward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its bottom-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Square of side `size` at (x, y)
    pub fn square(x: f32, y: f32, size: f32) -> Self {
        Self::new(x, y, size, size)
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// True if the rectangles share interior area. Touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let a_max = self.pos + self.size;
        let b_max = other.pos + other.size;
        self.pos.x < b_max.x
            && a_max.x > other.pos.x
            && self.pos.y < b_max.y
            && a_max.y > other.pos.y
    }
}

//! Axis-aligned screen rectangles.

#[cfg(test)]
#[path = "bbox_test.rs"]
mod bbox_test;

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen pixels, y pointing down.
///
/// Edges are inclusive: a point on the border is inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BBox {
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    /// Build from a top-left corner and a size.
    #[must_use]
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { left: x, top: y, right: x + width, bottom: y + height }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Whether `(x, y)` lies inside or on the border.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Distances from `(x, y)` to the left, right, top and bottom edges.
    ///
    /// All four are non-negative when the point is inside.
    #[must_use]
    pub fn edge_distances(&self, x: f64, y: f64) -> [f64; 4] {
        [x - self.left, self.right - x, y - self.top, self.bottom - y]
    }
}

//! Map model: tile codes, the realm grid, rectangles and the
//! adjacency-pattern matcher used for wall normalization.

pub mod adjacency;
pub mod grid;
pub mod rect;
pub mod tile;

pub use adjacency::{AdjFlags, MagicRec, MaskSet, PatternTable, neighbor_mask, normalize_region, normalize_tile};
pub use grid::Grid;
pub use rect::Rect;
pub use tile::{Layer, Tile, TileCode, tid};

use serde::{Deserialize, Serialize};

/// A world-space position
///
/// Generation works on integer tile coordinates; the simulation keeps
/// fractional positions so emitter radii behave as true circles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pos {
    pub x: f32,
    pub y: f32,
}

impl Pos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position
    pub fn distance(&self, other: Pos) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(i32, i32)> for Pos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x as f32, y as f32)
    }
}

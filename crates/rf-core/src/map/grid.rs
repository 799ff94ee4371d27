//! The realm grid
//!
//! A width × height array of tiles. All coordinate queries are bounded:
//! out-of-range reads yield `None` (or the unset code), out-of-range
//! writes yield `EngineError::OutOfBounds`. Tiles are never removed; they
//! live as long as the grid.

use serde::{Deserialize, Serialize};

use super::{Layer, Rect, Tile, TileCode};
use crate::error::{EngineError, Result};

/// A 2D tile grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a grid of unset tiles
    pub fn new(width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Self {
            width,
            height,
            tiles: vec![Tile::default(); (width * height) as usize],
        }
    }

    /// Create a grid with every background seeded to one base id
    ///
    /// Realm generation starts from a uniform grass background.
    pub fn filled(width: i32, height: i32, background: u16) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Self {
            width,
            height,
            tiles: vec![Tile::with_background(background); (width * height) as usize],
        }
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    /// The rectangle covering the whole grid
    pub const fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width - 1, self.height - 1)
    }

    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    const fn index(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Bounded tile lookup; out-of-range returns no tile
    pub fn tile(&self, x: i32, y: i32) -> Option<&Tile> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(&self.tiles[self.index(x, y)])
    }

    /// Bounded mutable tile lookup
    pub fn tile_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let idx = self.index(x, y);
        Some(&mut self.tiles[idx])
    }

    /// Read one layer, with the unset code standing in for "no tile"
    pub fn layer(&self, x: i32, y: i32, layer: Layer) -> TileCode {
        self.tile(x, y).map_or(TileCode::UNSET, |t| t.layer(layer))
    }

    /// Write one layer of a tile
    pub fn set_layer(&mut self, x: i32, y: i32, layer: Layer, code: TileCode) -> Result<()> {
        match self.tile_mut(x, y) {
            Some(tile) => {
                tile.set_layer(layer, code);
                Ok(())
            }
            None => Err(EngineError::OutOfBounds { x, y }),
        }
    }

    /// Write the background layer
    pub fn set_background(&mut self, x: i32, y: i32, code: TileCode) -> Result<()> {
        self.set_layer(x, y, Layer::Background, code)
    }

    /// Write the foreground layer
    pub fn set_foreground(&mut self, x: i32, y: i32, code: TileCode) -> Result<()> {
        self.set_layer(x, y, Layer::Foreground, code)
    }
}

//! Tile codes and layers
//!
//! A tile code packs a semantic base id in the low byte and a visual
//! variant (corner/edge/junction style) in the high byte:
//! `code = base | (variant << 8)`. Generators write plain base ids; only
//! the pattern matcher ever sets variant bits.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Base tile ids used by the realm generators and building renderer
pub mod tid {
    /// Unset / empty
    pub const NONE: u16 = 0;
    /// Grass background
    pub const GRASS: u16 = 1;
    /// Water background (rivers, lakes)
    pub const WATER: u16 = 2;
    /// Tree foreground
    pub const TREE: u16 = 3;
    /// Mountain foreground
    pub const MOUNTAIN: u16 = 4;
    /// Road foreground
    pub const ROAD: u16 = 5;
    /// Interior room wall
    pub const ROOM_WALL: u16 = 6;
    /// Building/block perimeter wall
    pub const BLOCK_WALL: u16 = 7;
}

/// A packed tile code: base id plus visual variant
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, PartialOrd, Ord,
)]
pub struct TileCode(pub u16);

impl TileCode {
    /// The unset code
    pub const UNSET: TileCode = TileCode(0);

    /// Build a code from a base id with variant 0
    pub const fn base_only(base: u16) -> Self {
        TileCode(base & 0x00ff)
    }

    /// Semantic base id, ignoring the variant
    pub const fn base(&self) -> u16 {
        self.0 & 0x00ff
    }

    /// Visual variant encoded in the high byte
    pub const fn variant(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Same base id with a different variant
    pub const fn with_variant(&self, variant: u8) -> Self {
        TileCode(self.base() | ((variant as u16) << 8))
    }

    pub const fn is_unset(&self) -> bool {
        self.0 == 0
    }
}

impl From<u16> for TileCode {
    fn from(raw: u16) -> Self {
        TileCode(raw)
    }
}

/// Which layer of a tile an operation addresses
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Layer {
    #[default]
    Background,
    Foreground,
}

/// A single map tile with a background and a foreground code
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub background: TileCode,
    pub foreground: TileCode,
}

impl Tile {
    /// Tile with the given background and no foreground
    pub const fn with_background(base: u16) -> Self {
        Self {
            background: TileCode::base_only(base),
            foreground: TileCode::UNSET,
        }
    }

    /// Read one layer
    pub const fn layer(&self, layer: Layer) -> TileCode {
        match layer {
            Layer::Background => self.background,
            Layer::Foreground => self.foreground,
        }
    }

    /// Write one layer
    pub const fn set_layer(&mut self, layer: Layer, code: TileCode) {
        match layer {
            Layer::Background => self.background = code,
            Layer::Foreground => self.foreground = code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_packing() {
        let code = TileCode::base_only(tid::ROOM_WALL).with_variant(10);
        assert_eq!(code.base(), tid::ROOM_WALL);
        assert_eq!(code.variant(), 10);
        assert_eq!(code.0, tid::ROOM_WALL | (10 << 8));
    }

    #[test]
    fn test_unset() {
        assert!(TileCode::UNSET.is_unset());
        assert!(!TileCode::base_only(tid::TREE).is_unset());
        assert_eq!(Tile::default().foreground, TileCode::UNSET);
    }

    #[test]
    fn test_layer_access() {
        let mut tile = Tile::with_background(tid::GRASS);
        assert_eq!(tile.layer(Layer::Background).base(), tid::GRASS);
        tile.set_layer(Layer::Foreground, TileCode::base_only(tid::TREE));
        assert_eq!(tile.layer(Layer::Foreground).base(), tid::TREE);
    }
}

//! Adjacency-pattern wall normalization
//!
//! Walls are drawn as plain base ids and then "normalized": an 8-bit
//! neighbor bitmask is computed per tile and looked up in an ordered
//! pattern table, and the winning entry's index becomes the tile's visual
//! variant (corner, edge, tee, surrounded center).
//!
//! Two tables exist. The room-wall table is scanned in ascending index
//! order, first hit wins. The block-wall table is scanned in descending
//! order; its entries above index 10 also require a secondary bitmask,
//! computed against the room-wall id, to land in their `Ext` set. The
//! descending scan lets those dual-context entries override the generic
//! geometry entries without per-entry priority fields.

use bitflags::bitflags;

use super::{Grid, Layer, Rect, TileCode, tile::tid};
use crate::error::Result;

bitflags! {
    /// 8-neighbor adjacency mask, one bit per compass direction
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AdjFlags: u8 {
        const N = 0x01;
        const NE = 0x02;
        const E = 0x04;
        const SE = 0x08;
        const S = 0x10;
        const SW = 0x20;
        const W = 0x40;
        const NW = 0x80;
    }
}

/// Neighbor offsets in bit order: N, NE, E, SE, S, SW, W, NW
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Compute the adjacency mask for one tile
///
/// Bit i is set when the neighbor in compass direction i carries `base`
/// on `layer`. Out-of-range neighbors never match.
pub fn neighbor_mask(grid: &Grid, x: i32, y: i32, layer: Layer, base: u16) -> AdjFlags {
    let mut mask = AdjFlags::empty();
    for (i, (dx, dy)) in NEIGHBOR_OFFSETS.iter().enumerate() {
        if grid.layer(x + dx, y + dy, layer).base() == base {
            mask |= AdjFlags::from_bits_retain(1u8 << i);
        }
    }
    mask
}

/// A compact set of adjacency masks: a mask is a member when its bits
/// agree with `bits` on every position `care` names. Don't-care bits
/// cover all diagonal combinations of one cardinal pattern in a single
/// record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskSet {
    pub bits: u8,
    pub care: u8,
}

impl MaskSet {
    pub const fn new(bits: u8, care: u8) -> Self {
        Self { bits, care }
    }

    pub const fn contains(&self, mask: u8) -> bool {
        mask & self.care == self.bits & self.care
    }
}

/// One pattern-table entry: the masks that select this variant, plus the
/// secondary (room-wall) masks required by override entries. An empty
/// `ext` means the entry matches on `main` alone.
#[derive(Debug, Clone, Copy)]
pub struct MagicRec {
    pub main: &'static [MaskSet],
    pub ext: &'static [MaskSet],
}

impl MagicRec {
    const fn plain(main: &'static [MaskSet]) -> Self {
        Self { main, ext: &[] }
    }

    fn main_contains(&self, mask: AdjFlags) -> bool {
        self.main.iter().any(|s| s.contains(mask.bits()))
    }

    fn ext_contains(&self, mask: AdjFlags) -> bool {
        self.ext.is_empty() || self.ext.iter().any(|s| s.contains(mask.bits()))
    }
}

/// Wall variant indices assigned by the pattern tables
pub mod wall_variant {
    /// Horizontal run (E+W)
    pub const HORIZONTAL: u8 = 0;
    /// Vertical run (N+S)
    pub const VERTICAL: u8 = 1;
    pub const CORNER_NW: u8 = 2;
    pub const CORNER_NE: u8 = 3;
    pub const CORNER_SW: u8 = 4;
    pub const CORNER_SE: u8 = 5;
    /// Tee with the stem running south
    pub const TEE_S: u8 = 6;
    pub const TEE_N: u8 = 7;
    pub const TEE_E: u8 = 8;
    pub const TEE_W: u8 = 9;
    /// Surrounded center: every cardinal neighbor is wall
    pub const SC: u8 = 10;
    /// Block-wall overrides: run with room wall adjoining from one side
    pub const H_ROOM_S: u8 = 11;
    pub const H_ROOM_N: u8 = 12;
    pub const V_ROOM_E: u8 = 13;
    pub const V_ROOM_W: u8 = 14;
}

const N: u8 = 0x01;
const E: u8 = 0x04;
const S: u8 = 0x10;
const W: u8 = 0x40;
/// All four cardinal bits; the diagonals stay don't-care in most entries
const CARD: u8 = N | E | S | W;
const ALL: u8 = 0xff;

/// Room-wall pattern table, scanned ascending; entry index = variant.
///
/// The cardinal patterns of entries 0-9 are mutually exclusive, so the
/// ascending first-match scan is unambiguous; entry 10 picks up every
/// all-cardinal mask (the fully surrounded 0xff case included).
pub static ROOM_WALL_PATTERNS: [MagicRec; 11] = [
    MagicRec::plain(&[MaskSet::new(E | W, CARD)]),
    MagicRec::plain(&[MaskSet::new(N | S, CARD)]),
    MagicRec::plain(&[MaskSet::new(E | S, CARD)]),
    MagicRec::plain(&[MaskSet::new(W | S, CARD)]),
    MagicRec::plain(&[MaskSet::new(N | E, CARD)]),
    MagicRec::plain(&[MaskSet::new(N | W, CARD)]),
    MagicRec::plain(&[MaskSet::new(E | W | S, CARD)]),
    MagicRec::plain(&[MaskSet::new(E | W | N, CARD)]),
    MagicRec::plain(&[MaskSet::new(N | S | E, CARD)]),
    MagicRec::plain(&[MaskSet::new(N | S | W, CARD)]),
    MagicRec::plain(&[MaskSet::new(ALL, CARD)]),
];

/// Block-wall pattern table, scanned descending. Entries 0-10 mirror the
/// room-wall geometry; entries 11-14 override a plain run when a room
/// wall adjoins from the named side (their `Ext` set tests the secondary
/// mask).
pub static BLOCK_WALL_PATTERNS: [MagicRec; 15] = [
    MagicRec::plain(&[MaskSet::new(E | W, CARD)]),
    MagicRec::plain(&[MaskSet::new(N | S, CARD)]),
    MagicRec::plain(&[MaskSet::new(E | S, CARD)]),
    MagicRec::plain(&[MaskSet::new(W | S, CARD)]),
    MagicRec::plain(&[MaskSet::new(N | E, CARD)]),
    MagicRec::plain(&[MaskSet::new(N | W, CARD)]),
    MagicRec::plain(&[MaskSet::new(E | W | S, CARD)]),
    MagicRec::plain(&[MaskSet::new(E | W | N, CARD)]),
    MagicRec::plain(&[MaskSet::new(N | S | E, CARD)]),
    MagicRec::plain(&[MaskSet::new(N | S | W, CARD)]),
    MagicRec::plain(&[MaskSet::new(ALL, CARD)]),
    MagicRec {
        main: &[MaskSet::new(E | W, CARD)],
        ext: &[MaskSet::new(S, S)],
    },
    MagicRec {
        main: &[MaskSet::new(E | W, CARD)],
        ext: &[MaskSet::new(N, N)],
    },
    MagicRec {
        main: &[MaskSet::new(N | S, CARD)],
        ext: &[MaskSet::new(E, E)],
    },
    MagicRec {
        main: &[MaskSet::new(N | S, CARD)],
        ext: &[MaskSet::new(W, W)],
    },
];

/// Which pattern table (and scan direction) a normalization pass uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternTable {
    /// Room walls: ascending scan, first `Main` hit wins
    RoomWall,
    /// Block walls: descending scan, `Ext`-qualified entries first
    BlockWall,
}

impl PatternTable {
    fn records(&self) -> &'static [MagicRec] {
        match self {
            PatternTable::RoomWall => &ROOM_WALL_PATTERNS,
            PatternTable::BlockWall => &BLOCK_WALL_PATTERNS,
        }
    }

    /// Look up the variant for a primary/secondary mask pair
    pub fn match_variant(&self, mask: AdjFlags, ext_mask: AdjFlags) -> Option<u8> {
        let records = self.records();
        match self {
            PatternTable::RoomWall => records
                .iter()
                .position(|rec| rec.main_contains(mask))
                .map(|idx| idx as u8),
            PatternTable::BlockWall => records
                .iter()
                .enumerate()
                .rev()
                .find(|(_, rec)| rec.main_contains(mask) && rec.ext_contains(ext_mask))
                .map(|(idx, _)| idx as u8),
        }
    }
}

/// Normalize a single tile against one pattern table
///
/// Computes the adjacency mask for `base` on `layer`; a fully isolated
/// tile (mask 0) or an unmatched mask leaves the tile untouched. On a
/// match the tile's foreground becomes `base | variant << 8`. Returns
/// whether a variant was written.
pub fn normalize_tile(
    grid: &mut Grid,
    x: i32,
    y: i32,
    layer: Layer,
    base: u16,
    table: PatternTable,
) -> Result<bool> {
    let mask = neighbor_mask(grid, x, y, layer, base);
    if mask.is_empty() {
        return Ok(false);
    }

    // Secondary context: room-wall adjacency on the same layer
    let ext_mask = match table {
        PatternTable::RoomWall => AdjFlags::empty(),
        PatternTable::BlockWall => neighbor_mask(grid, x, y, layer, tid::ROOM_WALL),
    };

    match table.match_variant(mask, ext_mask) {
        Some(variant) => {
            grid.set_foreground(x, y, TileCode::base_only(base).with_variant(variant))?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Normalize every tile in `rect` that carries `base` on `layer`
///
/// Row-major sweep. A failed write aborts the remaining rows of this
/// pass and surfaces the error; the caller logs it and moves on to the
/// next pass, tolerating partially-normalized output.
pub fn normalize_region(
    grid: &mut Grid,
    rect: Rect,
    layer: Layer,
    base: u16,
    table: PatternTable,
) -> Result<()> {
    for y in rect.ly..=rect.hy {
        for x in rect.lx..=rect.hx {
            if grid.layer(x, y, layer).base() == base {
                normalize_tile(grid, x, y, layer, base, table)?;
            }
        }
    }
    Ok(())
}

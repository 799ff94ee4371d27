//! Building rendering
//!
//! A building is an axis-aligned area subdivided into blocks and rooms
//! (pure containment; callers keep overlap sane). Rendering draws the
//! raw wall borders and then runs the two normalization passes from
//! [`crate::map::adjacency`]: room walls first, so the block-wall pass
//! can see them through its secondary `Ext` masks.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::map::{Grid, Layer, PatternTable, Rect, TileCode, normalize_region, tile::tid};

/// A building: an area with block and room sub-rectangles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    pub area: Rect,
    pub blocks: Vec<Rect>,
    pub rooms: Vec<Rect>,
}

impl Building {
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            blocks: Vec::new(),
            rooms: Vec::new(),
        }
    }
}

/// Draw `base` on the foreground of every border tile of `rect`
///
/// Writes are bounded; the portion of a rect hanging off the grid is
/// simply skipped.
pub fn draw_border(grid: &mut Grid, rect: Rect, base: u16) {
    for (x, y) in rect.iter_points() {
        if rect.on_border(x, y) && grid.in_bounds(x, y) {
            let _ = grid.set_foreground(x, y, TileCode::base_only(base));
        }
    }
}

/// Render a building onto the grid
///
/// Block walls go down for the building area and every block, room walls
/// for every room, then the room-wall and block-wall normalization
/// passes run over the building's bounding rect, in that order. A
/// failing pass is logged and abandoned; later passes still run, and
/// partially-normalized walls are tolerated.
pub fn render_building(grid: &mut Grid, building: &Building) {
    draw_border(grid, building.area, tid::BLOCK_WALL);
    for block in &building.blocks {
        draw_border(grid, *block, tid::BLOCK_WALL);
    }
    for room in &building.rooms {
        draw_border(grid, *room, tid::ROOM_WALL);
    }

    if let Err(err) = normalize_region(
        grid,
        building.area,
        Layer::Foreground,
        tid::ROOM_WALL,
        PatternTable::RoomWall,
    ) {
        warn!(area = %building.area, %err, "room-wall normalization abandoned");
    }
    if let Err(err) = normalize_region(
        grid,
        building.area,
        Layer::Foreground,
        tid::BLOCK_WALL,
        PatternTable::BlockWall,
    ) {
        warn!(area = %building.area, %err, "block-wall normalization abandoned");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::adjacency::wall_variant;

    #[test]
    fn test_draw_border_is_hollow() {
        let mut grid = Grid::new(12, 12);
        draw_border(&mut grid, Rect::new(2, 2, 8, 8), tid::BLOCK_WALL);
        assert_eq!(grid.layer(2, 2, Layer::Foreground).base(), tid::BLOCK_WALL);
        assert_eq!(grid.layer(5, 2, Layer::Foreground).base(), tid::BLOCK_WALL);
        assert!(grid.layer(5, 5, Layer::Foreground).is_unset());
    }

    #[test]
    fn test_render_building_normalizes_corners() {
        let mut grid = Grid::new(20, 20);
        let building = Building::new(Rect::new(1, 1, 15, 15));
        render_building(&mut grid, &building);
        let fg = grid.layer(1, 1, Layer::Foreground);
        assert_eq!(fg.base(), tid::BLOCK_WALL);
        assert_eq!(fg.variant(), wall_variant::CORNER_NW);
        assert_eq!(
            grid.layer(8, 1, Layer::Foreground).variant(),
            wall_variant::HORIZONTAL
        );
    }

    #[test]
    fn test_room_walls_feed_block_ext_pass() {
        // A room tucked right under the building's top run: the
        // perimeter tiles above the room's top wall must pick the
        // Ext-qualified override variant.
        let mut grid = Grid::new(20, 20);
        let mut building = Building::new(Rect::new(1, 1, 15, 15));
        building.rooms.push(Rect::new(4, 2, 9, 7));
        render_building(&mut grid, &building);

        // (5, 1) sits on the building's top run with the room wall at
        // (5, 2) adjoining from the south
        let fg = grid.layer(5, 1, Layer::Foreground);
        assert_eq!(fg.base(), tid::BLOCK_WALL);
        assert_eq!(fg.variant(), wall_variant::H_ROOM_S);
    }

    #[test]
    fn test_blocks_share_building_walls() {
        // Two blocks splitting the building down the middle: the shared
        // vertical run becomes a proper wall, not two abutting borders
        let mut grid = Grid::new(20, 20);
        let mut building = Building::new(Rect::new(1, 1, 15, 11));
        building.blocks.push(Rect::new(1, 1, 8, 11));
        building.blocks.push(Rect::new(8, 1, 15, 11));
        render_building(&mut grid, &building);

        let fg = grid.layer(8, 5, Layer::Foreground);
        assert_eq!(fg.base(), tid::BLOCK_WALL);
        assert_eq!(fg.variant(), wall_variant::VERTICAL);
        // Where the shared run meets the building's top wall
        assert_eq!(
            grid.layer(8, 1, Layer::Foreground).variant(),
            wall_variant::TEE_S
        );
    }

    #[test]
    fn test_partial_offgrid_building_renders() {
        let mut grid = Grid::new(10, 10);
        let building = Building::new(Rect::new(5, 5, 14, 14));
        // Must not panic; the on-grid portion is drawn
        render_building(&mut grid, &building);
        assert_eq!(grid.layer(5, 5, Layer::Foreground).base(), tid::BLOCK_WALL);
    }
}

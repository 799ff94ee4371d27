//! Realm terrain generation
//!
//! Stochastic passes over a mutable grid plus a seeded RNG: a big river,
//! forest scatter, mountain ranges and lakes. Every pass is a pure
//! function of (grid, rng), so a fixed seed reproduces the realm
//! bit-for-bit.

use rf_rng::GameRng;

use super::path::{carve_path, fill_lake};
use crate::map::{Grid, Layer, Rect, TileCode, tile::tid};

/// Mountain seeding density before the relaxation pass
const MOUNTAIN_DENSITY: f64 = 0.45;

/// Steps in one forest cluster's random walk
const FOREST_WALK_STEPS: i32 = 5;

/// Neighbor offsets for 8-direction walks
const DIRS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Mark a tile as river/lake water: water background, foreground cleared
fn make_water(grid: &mut Grid, x: i32, y: i32) {
    if let Some(tile) = grid.tile_mut(x, y) {
        tile.background = TileCode::base_only(tid::WATER);
        tile.foreground = TileCode::UNSET;
    }
}

/// Carve one big river across the realm
///
/// Picks a random point on a random map edge and a random point in the
/// opposite half, then carves a connected watery path between them.
pub fn big_river(grid: &mut Grid, rng: &mut GameRng) {
    let (w, h) = (grid.width(), grid.height());
    if w < 2 || h < 2 {
        return;
    }

    // Edge order: north, east, south, west
    let (x1, y1, x2, y2) = match rng.rn2(4) {
        0 => (rng.rn2(w), 0, rng.rn2(w), h / 2 + rng.rn2(h - h / 2)),
        1 => (w - 1, rng.rn2(h), rng.rn2(w / 2), rng.rn2(h)),
        2 => (rng.rn2(w), h - 1, rng.rn2(w), rng.rn2(h / 2)),
        _ => (0, rng.rn2(h), w / 2 + rng.rn2(w - w / 2), rng.rn2(h)),
    };

    carve_path(grid, x1, y1, x2, y2, grid.bounds(), rng, &mut make_water);
}

/// Scatter tree clusters over `area`
///
/// Cluster count is sampled once as `range(15, 25)`. Each cluster starts
/// at a random point and walks five 8-direction steps, planting a tree
/// on every visited tile whose foreground is still unset.
pub fn scatter_forest(grid: &mut Grid, area: Rect, rng: &mut GameRng) {
    let clusters = rng.range(15, 25);
    for _ in 0..clusters {
        let mut x = area.lx + rng.rn2(area.width());
        let mut y = area.ly + rng.rn2(area.height());
        plant_tree(grid, area, x, y);
        for _ in 0..FOREST_WALK_STEPS {
            let (dx, dy) = DIRS[rng.rn2(8) as usize];
            x += dx;
            y += dy;
            plant_tree(grid, area, x, y);
        }
    }
}

fn plant_tree(grid: &mut Grid, area: Rect, x: i32, y: i32) {
    if !area.contains_point(x, y) {
        return;
    }
    if let Some(tile) = grid.tile_mut(x, y)
        && tile.foreground.is_unset()
    {
        tile.foreground = TileCode::base_only(tid::TREE);
    }
}

/// Raise mountain ranges inside `area`
///
/// Seeds mountain foreground at 0.45 density, then applies the
/// cellular-automaton rule exactly once against the seeded snapshot: a
/// tile is mountain afterward iff more than 4 of its 8 neighbors were.
/// The single relaxation step is deliberate; the ranges keep their
/// ragged, freshly-seeded look.
pub fn mountain_ranges(grid: &mut Grid, area: Rect, rng: &mut GameRng) {
    for (x, y) in area.iter_points() {
        if rng.frac() < MOUNTAIN_DENSITY
            && let Some(tile) = grid.tile_mut(x, y)
            && tile.foreground.is_unset()
        {
            tile.foreground = TileCode::base_only(tid::MOUNTAIN);
        }
    }

    let snapshot = grid.clone();
    let is_mountain = |x: i32, y: i32| {
        snapshot.layer(x, y, Layer::Foreground).base() == tid::MOUNTAIN
    };

    for (x, y) in area.iter_points() {
        let fg = snapshot.layer(x, y, Layer::Foreground);
        if !fg.is_unset() && fg.base() != tid::MOUNTAIN {
            continue; // other foregrounds are not part of the automaton
        }
        let neighbors = DIRS
            .iter()
            .filter(|(dx, dy)| is_mountain(x + dx, y + dy))
            .count();
        if neighbors > 4 {
            let _ = grid.set_foreground(x, y, TileCode::base_only(tid::MOUNTAIN));
        } else if is_mountain(x, y) {
            let _ = grid.set_foreground(x, y, TileCode::UNSET);
        }
    }
}

/// Dig lakes into the grass
///
/// Attempt count scales with how tall the realm is relative to its
/// width. Each attempt picks a random non-water point and fills a lake
/// of radius `range(4, 10)`; only grass tiles with an unset foreground
/// become water, and a mountain tile vetoes further expansion of that
/// lake.
pub fn dig_lakes(grid: &mut Grid, rng: &mut GameRng) {
    let (w, h) = (grid.width(), grid.height());
    if w < 1 || h < 1 {
        return;
    }
    let hi = ((h as f64 / w as f64) * 15.0).round() as i32;
    let attempts = rng.range(4, hi.max(4));

    for _ in 0..attempts {
        let x = rng.rn2(w);
        let y = rng.rn2(h);
        if grid.layer(x, y, Layer::Background).base() == tid::WATER {
            continue;
        }
        let radius = rng.range(4, 10);
        fill_lake(grid, x, y, radius, rng, &mut |g, tx, ty| {
            let Some(tile) = g.tile_mut(tx, ty) else {
                return true;
            };
            if tile.foreground.base() == tid::MOUNTAIN {
                return false;
            }
            if tile.background.base() == tid::GRASS && tile.foreground.is_unset() {
                tile.background = TileCode::base_only(tid::WATER);
            }
            true
        });
    }
}

//! Path-carving and lake-fill primitives
//!
//! Low-level mutation helpers the terrain generators build on. The path
//! carver only promises to connect two points with a marked, connected
//! trail; the lake filler visits a rough disc and lets its callback veto
//! further expansion.

use rf_rng::GameRng;

use crate::map::{Grid, Rect};

/// Carve a connected path from (x1, y1) to (x2, y2)
///
/// A biased random walk: every step moves one tile closer to the target
/// on a randomly chosen axis, with occasional diagonal drift, so the
/// walk always terminates. Each visited tile (endpoints included) is
/// handed to `write`. Steps are clamped to `bounds`.
pub fn carve_path(
    grid: &mut Grid,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    bounds: Rect,
    rng: &mut GameRng,
    write: &mut dyn FnMut(&mut Grid, i32, i32),
) {
    let clamp = |x: i32, y: i32| {
        (
            x.clamp(bounds.lx, bounds.hx),
            y.clamp(bounds.ly, bounds.hy),
        )
    };

    let (mut cx, mut cy) = clamp(x1, y1);
    let (tx, ty) = clamp(x2, y2);
    write(grid, cx, cy);

    while cx != tx || cy != ty {
        let dx = (tx - cx).signum();
        let dy = (ty - cy).signum();

        let step_x = if dx != 0 && dy != 0 {
            rng.one_in(2)
        } else {
            dx != 0
        };
        if step_x {
            cx += dx;
            // Diagonal drift keeps rivers from running straight
            if dy != 0 && rng.one_in(3) {
                cy += dy;
            }
        } else {
            cy += dy;
            if dx != 0 && rng.one_in(3) {
                cx += dx;
            }
        }
        (cx, cy) = clamp(cx, cy);
        write(grid, cx, cy);
    }
}

/// Fill a roughly circular lake around (cx, cy)
///
/// Visits tiles ring by ring out to `radius`, with a randomly ragged
/// rim. The callback applies the per-tile change and returns whether
/// expansion may continue; the first `false` stops the fill.
pub fn fill_lake(
    grid: &mut Grid,
    cx: i32,
    cy: i32,
    radius: i32,
    rng: &mut GameRng,
    changer: &mut dyn FnMut(&mut Grid, i32, i32) -> bool,
) {
    let radius = radius.max(0);
    let r2 = radius * radius;
    for ring in 0..=radius {
        for y in (cy - ring)..=(cy + ring) {
            for x in (cx - ring)..=(cx + ring) {
                let (ox, oy) = (x - cx, y - cy);
                if ox.abs().max(oy.abs()) != ring {
                    continue; // interior rings were visited already
                }
                let d2 = ox * ox + oy * oy;
                if d2 > r2 {
                    continue;
                }
                // Ragged rim: drop some outermost tiles
                if d2 >= (radius - 1) * (radius - 1) && rng.one_in(3) {
                    continue;
                }
                if !grid.in_bounds(x, y) {
                    continue;
                }
                if !changer(grid, x, y) {
                    return;
                }
            }
        }
    }
}

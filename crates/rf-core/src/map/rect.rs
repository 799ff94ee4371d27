//! Axis-aligned rectangles
//!
//! Buildings, rooms, blocks and BSP nodes are all rectangular areas.
//! Coordinates are inclusive on both ends: `hx`/`hy` name the last
//! column/row inside the rectangle.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with inclusive bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Left x coordinate
    pub lx: i32,
    /// Top y coordinate
    pub ly: i32,
    /// Right x coordinate (inclusive)
    pub hx: i32,
    /// Bottom y coordinate (inclusive)
    pub hy: i32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(lx: i32, ly: i32, hx: i32, hy: i32) -> Self {
        Self { lx, ly, hx, hy }
    }

    /// Rectangle from an origin and a size
    pub const fn sized(lx: i32, ly: i32, width: i32, height: i32) -> Self {
        Self {
            lx,
            ly,
            hx: lx + width - 1,
            hy: ly + height - 1,
        }
    }

    /// Width of the rectangle (0 when degenerate)
    pub const fn width(&self) -> i32 {
        if self.hx >= self.lx {
            self.hx - self.lx + 1
        } else {
            0
        }
    }

    /// Height of the rectangle (0 when degenerate)
    pub const fn height(&self) -> i32 {
        if self.hy >= self.ly {
            self.hy - self.ly + 1
        } else {
            0
        }
    }

    /// Check if the rectangle is valid (has positive area)
    pub const fn is_valid(&self) -> bool {
        self.hx >= self.lx && self.hy >= self.ly
    }

    /// Check if a point lies inside the rectangle
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.lx && x <= self.hx && y >= self.ly && y <= self.hy
    }

    /// Check if a point lies on the rectangle's one-tile border
    pub const fn on_border(&self, x: i32, y: i32) -> bool {
        self.contains_point(x, y)
            && (x == self.lx || x == self.hx || y == self.ly || y == self.hy)
    }

    /// Check if this rectangle contains another
    pub const fn contains(&self, other: &Rect) -> bool {
        self.lx <= other.lx && self.hx >= other.hx && self.ly <= other.ly && self.hy >= other.hy
    }

    /// Check if this rectangle intersects another
    pub const fn intersects(&self, other: &Rect) -> bool {
        !(self.hx < other.lx || self.lx > other.hx || self.hy < other.ly || self.ly > other.hy)
    }

    /// Calculate the intersection of two rectangles
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }

        Some(Rect {
            lx: self.lx.max(other.lx),
            ly: self.ly.max(other.ly),
            hx: self.hx.min(other.hx),
            hy: self.hy.min(other.hy),
        })
    }

    /// Center point (rounded toward the origin)
    pub const fn center(&self) -> (i32, i32) {
        ((self.lx + self.hx) / 2, (self.ly + self.hy) / 2)
    }

    /// Iterate every (x, y) inside the rectangle, row-major
    pub fn iter_points(&self) -> impl Iterator<Item = (i32, i32)> + use<> {
        let copy = *self;
        (copy.ly..=copy.hy).flat_map(move |y| (copy.lx..=copy.hx).map(move |x| (x, y)))
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})-({},{})", self.lx, self.ly, self.hx, self.hy)
    }
}

//! BSP partitioning
//!
//! Splits a rectangular area into city blocks by recursive binary
//! partition. Node and street numbering comes from an explicit
//! [`GenSession`] counter context, so generation is reentrant and two
//! concurrent sessions never share ids.

use rf_rng::GameRng;
use serde::{Deserialize, Serialize};

use crate::map::Rect;

/// Counters owned by one generation session
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GenSession {
    next_node_id: u32,
    next_street: u32,
}

impl GenSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh BSP node id
    pub fn alloc_node_id(&mut self) -> u32 {
        let id = self.next_node_id;
        self.next_node_id += 1;
        id
    }

    /// Allocate the next street number
    pub fn alloc_street(&mut self) -> u32 {
        let n = self.next_street;
        self.next_street += 1;
        n
    }
}

/// One node of a BSP partition tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BspNode {
    pub id: u32,
    pub area: Rect,
    pub children: Option<Box<(BspNode, BspNode)>>,
}

impl BspNode {
    /// Recursively partition `area` until no split can keep both halves
    /// at least `min_side` wide and tall
    pub fn split(session: &mut GenSession, area: Rect, min_side: i32, rng: &mut GameRng) -> Self {
        let id = session.alloc_node_id();
        let min_side = min_side.max(1);

        // Split across the longer axis; a valid cut leaves min_side on
        // each side
        let horizontal = area.width() >= area.height();
        let extent = if horizontal { area.width() } else { area.height() };
        if extent < 2 * min_side {
            return Self {
                id,
                area,
                children: None,
            };
        }

        let offset = min_side + rng.rn2(extent - 2 * min_side + 1);
        let (first, second) = if horizontal {
            let cut = area.lx + offset;
            (
                Rect::new(area.lx, area.ly, cut - 1, area.hy),
                Rect::new(cut, area.ly, area.hx, area.hy),
            )
        } else {
            let cut = area.ly + offset;
            (
                Rect::new(area.lx, area.ly, area.hx, cut - 1),
                Rect::new(area.lx, cut, area.hx, area.hy),
            )
        };

        let left = Self::split(session, first, min_side, rng);
        let right = Self::split(session, second, min_side, rng);
        Self {
            id,
            area,
            children: Some(Box::new((left, right))),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Collect the leaf rectangles (the city blocks)
    pub fn leaves(&self) -> Vec<Rect> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<Rect>) {
        match &self.children {
            None => out.push(self.area),
            Some(pair) => {
                pair.0.collect_leaves(out);
                pair.1.collect_leaves(out);
            }
        }
    }

    /// Collect every node id in the tree, preorder
    pub fn node_ids(&self) -> Vec<u32> {
        let mut out = Vec::new();
        self.collect_ids(&mut out);
        out
    }

    fn collect_ids(&self, out: &mut Vec<u32>) {
        out.push(self.id);
        if let Some(pair) = &self.children {
            pair.0.collect_ids(out);
            pair.1.collect_ids(out);
        }
    }
}

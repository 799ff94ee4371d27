//! rf-core: Realmforge engine primitives
//!
//! This crate contains the map/tile model, procedural realm generation,
//! building rendering with adjacency-pattern wall normalization, and the
//! emitter/brain simulation shared by the realmforge games. It has no I/O
//! dependencies and is designed to be pure and testable: every generator
//! takes an explicit [`rf_rng::GameRng`] so output is reproducible.

pub mod error;
pub mod map;
pub mod mapgen;
pub mod sim;

pub use error::{EngineError, Result};
pub use map::{Grid, Layer, Pos, Rect, Tile, TileCode};

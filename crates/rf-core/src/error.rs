//! Engine error types
//!
//! Lookup misses (missing tile, missing entity) are `Option`s at the call
//! site, never errors. `EngineError` covers faults that abort a pass or a
//! think-cycle phase; callers catch them at that boundary, log, and keep
//! going with whatever partial state the last successful mutation left.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("coordinate ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i32, y: i32 },

    #[error("region {0} is empty")]
    EmptyRegion(String),

    #[error("behavior hook failed: {0}")]
    Behavior(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

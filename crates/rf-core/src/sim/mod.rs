//! Simulation primitives: stimulus emitters and the goal-driven brain.
//!
//! Single-threaded and tick-driven: the owning space calls
//! [`EmitterList::update`] once per tick, then each agent's
//! [`Brain::think`]. Nothing here blocks; every phase runs to completion
//! inside its tick.

pub mod brain;
pub mod emitter;

pub use brain::{Behavior, Brain, Goal, GoalKind, GoalList, PERSISTENT};
pub use emitter::{Emitter, EmitterId, EmitterKind, EmitterList, EntityId, EntityLocator};

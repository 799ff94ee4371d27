//! Stimulus emitters
//!
//! An emitter is a positioned, time-bounded stimulus (a noise, a smell,
//! a beacon) broadcast to nearby agents. Emitters reference their source
//! entity through an opaque handle resolved via [`EntityLocator`];
//! entity deletion can never dangle them, it only freezes the emitter in
//! place.

use serde::{Deserialize, Serialize};

use crate::map::Pos;

/// Opaque entity handle, resolved through an [`EntityLocator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// Unique emitter id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmitterId(pub u64);

/// Small-integer emitter kind tag (noise, scent, light, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmitterKind(pub u8);

/// Entity position lookup, injected by the owning space
pub trait EntityLocator {
    /// Resolve an entity handle to its current location, if it still
    /// exists
    fn locate(&self, id: EntityId) -> Option<Pos>;
}

/// A live stimulus source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Emitter {
    pub id: EmitterId,
    pub kind: EmitterKind,
    pub source: EntityId,
    pub pos: Pos,
    pub radius: f32,
    /// Total lifetime; 0 means permanent
    pub expiry_time: i32,
    /// Remaining lifetime (meaningful only when `expiry_time > 0`)
    pub expiry_left: i32,
    /// Track the source entity's position each tick
    pub dynamic_source_pos: bool,
}

impl Emitter {
    pub const fn is_permanent(&self) -> bool {
        self.expiry_time == 0
    }
}

/// Owns every live emitter in a space
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmitterList {
    emitters: Vec<Emitter>,
    next_id: u64,
}

impl EmitterList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an emitter; always succeeds and returns its fresh id
    ///
    /// `duration == 0` makes the emitter permanent.
    pub fn add_emitter(
        &mut self,
        kind: EmitterKind,
        source: EntityId,
        pos: Pos,
        radius: f32,
        duration: i32,
        dynamic: bool,
    ) -> EmitterId {
        let id = EmitterId(self.next_id);
        self.next_id += 1;
        self.emitters.push(Emitter {
            id,
            kind,
            source,
            pos,
            radius,
            expiry_time: duration,
            expiry_left: duration,
            dynamic_source_pos: dynamic,
        });
        id
    }

    /// Advance emitter lifetimes by `elapsed` ticks
    ///
    /// Non-permanent emitters decay and are dropped at `expiry_left <=
    /// 0`, iterating from the end so in-place removal stays safe.
    /// Dynamic emitters follow their source; a source that can no longer
    /// be found freezes the emitter at its last observed position
    /// instead of deleting it.
    pub fn update(&mut self, elapsed: i32, locator: &dyn EntityLocator) {
        for i in (0..self.emitters.len()).rev() {
            let emitter = &mut self.emitters[i];
            if !emitter.is_permanent() {
                emitter.expiry_left -= elapsed;
                if emitter.expiry_left <= 0 {
                    self.emitters.remove(i);
                    continue;
                }
            }
            if emitter.dynamic_source_pos {
                match locator.locate(emitter.source) {
                    Some(pos) => emitter.pos = pos,
                    None => emitter.dynamic_source_pos = false,
                }
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Emitter> {
        self.emitters.iter()
    }

    pub fn len(&self) -> usize {
        self.emitters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emitters.is_empty()
    }

    pub fn get(&self, id: EmitterId) -> Option<&Emitter> {
        self.emitters.iter().find(|e| e.id == id)
    }
}

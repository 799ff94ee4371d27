//! Goal-driven brains
//!
//! Each agent owns a [`Brain`]: an insertion-ordered goal list plus the
//! set of emitter kinds it is sensitive to. Once per tick the owner
//! calls [`Brain::think`], which runs four phases: prepare, emitter
//! scan, goal aging/evaluation, and execution of the single best goal.
//!
//! Agent kinds plug in through the [`Behavior`] capability interface
//! instead of inheritance; the engine only depends on the trait. Every
//! phase is fault-isolated: a hook returning an error is logged and
//! skipped, the goal list stays consistent, and later phases (and other
//! agents' think cycles) still run.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::emitter::{Emitter, EmitterId, EmitterKind, EmitterList};
use crate::error::Result;
use crate::map::Pos;

/// Duration sentinel marking a goal that never ages out
pub const PERSISTENT: i32 = -1;

/// Small-integer goal kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GoalKind(pub u16);

/// One candidate intention with a desirability score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub kind: GoalKind,
    /// Remaining ticks, or [`PERSISTENT`]
    pub duration: i32,
    /// Desirability, rewritten by `Behavior::evaluate_goal` each cycle
    pub value: f32,
    /// Set by execution to request release
    pub complete: bool,
    /// Emitter this goal reacts to, if any
    pub emitter: Option<EmitterId>,
}

impl Goal {
    pub fn new(kind: GoalKind, duration: i32) -> Self {
        Self {
            kind,
            duration,
            value: 0.0,
            complete: false,
            emitter: None,
        }
    }

    pub fn reacting_to(kind: GoalKind, duration: i32, emitter: EmitterId) -> Self {
        Self {
            emitter: Some(emitter),
            ..Self::new(kind, duration)
        }
    }

    pub const fn is_persistent(&self) -> bool {
        self.duration < 0
    }
}

/// Per-agent-kind hooks
///
/// All fallible hooks surface faults as values; the engine logs them at
/// the phase boundary and keeps going.
pub trait Behavior {
    /// Unconditional per-tick goal maintenance
    fn prepare_goals(&mut self, goals: &mut GoalList) -> Result<()> {
        let _ = goals;
        Ok(())
    }

    /// Perception check for a stimulus in range
    fn is_aware_of_emitter(&self, emitter: &Emitter) -> bool {
        let _ = emitter;
        true
    }

    /// React to a newly noticed stimulus, typically by adding a goal
    fn prepare_emitter(&mut self, goals: &mut GoalList, emitter: &Emitter) -> Result<()>;

    /// Score a goal; rewrites `goal.value`
    fn evaluate_goal(&mut self, goal: &mut Goal) -> Result<()>;

    /// Act on the winning goal; may set `goal.complete`
    fn execute_goal(&mut self, goal: &mut Goal) -> Result<()>;

    /// Build a goal of the given kind on demand; `None` declines
    fn create_goal(&mut self, kind: GoalKind) -> Option<Goal>;
}

/// Insertion-ordered goal storage
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalList {
    goals: Vec<Goal>,
}

impl GoalList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, goal: Goal) {
        self.goals.push(goal);
    }

    /// Fetch the goal of this kind, creating it through the behavior's
    /// `create_goal` hook when absent. The hook may decline, in which
    /// case nothing is added and `None` is returned.
    pub fn define_goal(&mut self, kind: GoalKind, behavior: &mut dyn Behavior) -> Option<&mut Goal> {
        if let Some(idx) = self.goals.iter().position(|g| g.kind == kind) {
            return Some(&mut self.goals[idx]);
        }
        let goal = behavior.create_goal(kind)?;
        self.goals.push(goal);
        self.goals.last_mut()
    }

    /// Release the goal at `idx` (removed and dropped)
    pub fn release(&mut self, idx: usize) {
        if idx < self.goals.len() {
            self.goals.remove(idx);
        }
    }

    pub fn references_emitter(&self, id: EmitterId) -> bool {
        self.goals.iter().any(|g| g.emitter == Some(id))
    }

    pub fn find(&self, kind: GoalKind) -> Option<&Goal> {
        self.goals.iter().find(|g| g.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Goal> {
        self.goals.iter()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}

/// One agent's goal engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Brain {
    /// Agent position, kept current by the owner
    pub pos: Pos,
    /// Emitter kinds this brain reacts to
    pub sensitivities: HashSet<EmitterKind>,
    pub goals: GoalList,
}

impl Brain {
    pub fn new(pos: Pos) -> Self {
        Self {
            pos,
            ..Self::default()
        }
    }

    /// Run one think cycle
    ///
    /// Phases: prepare hook, emitter scan, goal aging and evaluation,
    /// execution of the single highest-valued goal. Each phase's faults
    /// are logged and contained within that phase.
    pub fn think(&mut self, behavior: &mut dyn Behavior, emitters: &EmitterList) {
        if let Err(err) = behavior.prepare_goals(&mut self.goals) {
            warn!(%err, "prepare_goals hook failed");
        }

        self.scan_emitters(behavior, emitters);

        let best = self.age_and_evaluate(behavior);

        if let Some(idx) = best {
            if let Err(err) = behavior.execute_goal(&mut self.goals.goals[idx]) {
                warn!(%err, "goal execution failed");
            }
            if self.goals.goals[idx].complete {
                self.goals.release(idx);
            }
        }
    }

    /// Phase 2: offer in-range, unclaimed stimuli to the behavior
    fn scan_emitters(&mut self, behavior: &mut dyn Behavior, emitters: &EmitterList) {
        for emitter in emitters.iter() {
            if !self.sensitivities.contains(&emitter.kind) {
                continue;
            }
            // Inclusive Euclidean range check
            if self.pos.distance(emitter.pos) > emitter.radius {
                continue;
            }
            if self.goals.references_emitter(emitter.id) {
                continue;
            }
            if !behavior.is_aware_of_emitter(emitter) {
                continue;
            }
            if let Err(err) = behavior.prepare_emitter(&mut self.goals, emitter) {
                warn!(%err, emitter = emitter.id.0, "prepare_emitter hook failed");
            }
        }
    }

    /// Phase 3: age out expired goals and score the survivors
    ///
    /// Returns the index of the strictly highest-valued goal; ties keep
    /// the goal seen first. A goal that ages to zero this cycle is
    /// released without being scored.
    fn age_and_evaluate(&mut self, behavior: &mut dyn Behavior) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        let mut idx = 0;
        while idx < self.goals.goals.len() {
            let goal = &mut self.goals.goals[idx];
            if !goal.is_persistent() {
                goal.duration -= 1;
                if goal.duration <= 0 {
                    self.goals.release(idx);
                    continue;
                }
            }
            match behavior.evaluate_goal(goal) {
                Ok(()) => {
                    let value = self.goals.goals[idx].value;
                    if best.is_none_or(|(_, best_value)| value > best_value) {
                        best = Some((idx, value));
                    }
                }
                Err(err) => {
                    warn!(%err, "evaluate_goal hook failed");
                }
            }
            idx += 1;
        }
        best.map(|(idx, _)| idx)
    }
}

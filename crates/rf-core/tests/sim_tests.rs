//! Simulation integration tests: emitters and brains advancing together
//! over ticks, with hook faults contained per agent.

use std::collections::HashMap;

use rf_core::error::{EngineError, Result};
use rf_core::map::Pos;
use rf_core::sim::{
    Behavior, Brain, EmitterKind, EmitterList, EntityId, EntityLocator, Goal, GoalKind, GoalList,
    PERSISTENT,
};

const NOISE: EmitterKind = EmitterKind(1);
const INVESTIGATE: GoalKind = GoalKind(10);

struct World {
    positions: HashMap<EntityId, Pos>,
}

impl EntityLocator for World {
    fn locate(&self, id: EntityId) -> Option<Pos> {
        self.positions.get(&id).copied()
    }
}

struct Listener {
    executions: u32,
    broken: bool,
}

impl Behavior for Listener {
    fn prepare_goals(&mut self, _goals: &mut GoalList) -> Result<()> {
        if self.broken {
            return Err(EngineError::Behavior("listener wiring fault".into()));
        }
        Ok(())
    }

    fn prepare_emitter(&mut self, goals: &mut GoalList, emitter: &rf_core::sim::Emitter) -> Result<()> {
        goals.add(Goal::reacting_to(INVESTIGATE, PERSISTENT, emitter.id));
        Ok(())
    }

    fn evaluate_goal(&mut self, goal: &mut Goal) -> Result<()> {
        goal.value = 1.0;
        Ok(())
    }

    fn execute_goal(&mut self, goal: &mut Goal) -> Result<()> {
        self.executions += 1;
        let _ = goal;
        Ok(())
    }

    fn create_goal(&mut self, kind: GoalKind) -> Option<Goal> {
        Some(Goal::new(kind, PERSISTENT))
    }
}

#[test]
fn test_space_tick_reaches_agents_in_range() {
    let mut world = World {
        positions: HashMap::new(),
    };
    world.positions.insert(EntityId(1), Pos::new(10.0, 10.0));

    let mut emitters = EmitterList::new();
    emitters.add_emitter(NOISE, EntityId(1), Pos::new(10.0, 10.0), 8.0, 6, true);

    let mut near = Brain::new(Pos::new(12.0, 10.0));
    near.sensitivities.insert(NOISE);
    let mut far = Brain::new(Pos::new(40.0, 40.0));
    far.sensitivities.insert(NOISE);

    let mut near_behavior = Listener {
        executions: 0,
        broken: false,
    };
    let mut far_behavior = Listener {
        executions: 0,
        broken: false,
    };

    for _ in 0..3 {
        emitters.update(1, &world);
        near.think(&mut near_behavior, &emitters);
        far.think(&mut far_behavior, &emitters);
    }

    assert_eq!(near.goals.len(), 1);
    assert!(near_behavior.executions > 0);
    assert!(far.goals.is_empty());
    assert_eq!(far_behavior.executions, 0);
}

#[test]
fn test_broken_agent_does_not_block_others() {
    let world = World {
        positions: HashMap::new(),
    };
    let mut emitters = EmitterList::new();
    emitters.add_emitter(NOISE, EntityId(1), Pos::new(0.0, 0.0), 20.0, 0, false);

    let mut broken = Brain::new(Pos::new(1.0, 0.0));
    broken.sensitivities.insert(NOISE);
    let mut healthy = Brain::new(Pos::new(2.0, 0.0));
    healthy.sensitivities.insert(NOISE);

    let mut broken_behavior = Listener {
        executions: 0,
        broken: true,
    };
    let mut healthy_behavior = Listener {
        executions: 0,
        broken: false,
    };

    for _ in 0..2 {
        emitters.update(1, &world);
        broken.think(&mut broken_behavior, &emitters);
        healthy.think(&mut healthy_behavior, &emitters);
    }

    // The broken prepare hook is contained: its own later phases still
    // ran (the emitter scan added a goal), and the healthy agent is
    // untouched
    assert_eq!(broken.goals.len(), 1);
    assert_eq!(healthy.goals.len(), 1);
    assert!(healthy_behavior.executions > 0);
    assert!(broken_behavior.executions > 0);
}

#[test]
fn test_emitter_expiry_ends_reactions() {
    let world = World {
        positions: HashMap::new(),
    };
    let mut emitters = EmitterList::new();
    emitters.add_emitter(NOISE, EntityId(1), Pos::new(0.0, 0.0), 10.0, 2, false);

    let mut brain = Brain::new(Pos::new(1.0, 1.0));
    brain.sensitivities.insert(NOISE);
    let mut behavior = Listener {
        executions: 0,
        broken: false,
    };

    emitters.update(1, &world);
    assert_eq!(emitters.len(), 1);
    brain.think(&mut behavior, &emitters);
    assert_eq!(brain.goals.len(), 1);

    emitters.update(1, &world);
    assert!(emitters.is_empty());
    // The reaction goal persists independently of its emitter
    brain.think(&mut behavior, &emitters);
    assert_eq!(brain.goals.len(), 1);
}

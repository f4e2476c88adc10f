//! Simulation - the world plus its dispatcher, driven one step at a time.

use ember_core::{Entity, World};

use super::{Dispatcher, Rule, UpdateSummary};
use crate::events::Event;

/// Single owner of a world and the rules acting on it.
///
/// The host loop talks to it through `emit`, `update` and `cleanup` (or
/// `step`, which does the last two in order).
#[derive(Debug, Default)]
pub struct Simulation {
    pub world: World,
    dispatcher: Dispatcher,
}

impl Simulation {
    pub fn new(world: World, rules: Vec<Rule>) -> Self {
        Self {
            world,
            dispatcher: Dispatcher::new(rules),
        }
    }

    /// Queue an event for the next update.
    pub fn emit(&mut self, event: Event) {
        self.dispatcher.emit(event);
    }

    /// Run the rules against every event queued so far.
    pub fn update(&mut self) -> UpdateSummary {
        self.dispatcher.update(&mut self.world)
    }

    /// Finalize destructions requested during the step.
    pub fn cleanup(&mut self) -> Vec<Entity> {
        self.world.cleanup()
    }

    /// `update` followed by `cleanup`.
    pub fn step(&mut self) -> UpdateSummary {
        let summary = self.update();
        self.cleanup();
        summary
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::DestroyEntity;
    use crate::behavior::Trigger;
    use crate::events::Participant;

    #[test]
    fn test_step_purges_destroyed() {
        let mut world = World::new();
        let enemy = world.spawn(["enemy"]);
        let rules =
            vec![Rule::new(Trigger::new("killed")).with_action(DestroyEntity(Participant::A))];
        let mut sim = Simulation::new(world, rules);

        sim.emit(Event::new("killed").with_a(enemy));
        sim.update();

        assert!(!sim.world.is_alive(enemy));
        assert_eq!(sim.world.tags().entities_with_tag("enemy"), vec![enemy]);

        assert_eq!(sim.cleanup(), vec![enemy]);
        assert!(sim.world.tags().entities_with_tag("enemy").is_empty());
        assert!(sim.cleanup().is_empty());
    }
}

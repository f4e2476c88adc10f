//! Execution context handed to conditions and actions.

use ember_core::{Entity, World};

use super::Rule;
use crate::events::{Event, Participant};

/// Everything a rule body can see while handling one event.
///
/// The world is live state, not a snapshot: effects of earlier actions and
/// earlier rules on the same event are visible here.
pub struct Context<'a> {
    pub world: &'a mut World,
    pub event: &'a Event,
    pub rule: &'a Rule,
    outbox: &'a mut Vec<Event>,
}

impl<'a> Context<'a> {
    pub fn new(
        world: &'a mut World,
        event: &'a Event,
        rule: &'a Rule,
        outbox: &'a mut Vec<Event>,
    ) -> Self {
        Self {
            world,
            event,
            rule,
            outbox,
        }
    }

    /// Queue an event for the next dispatcher update.
    pub fn emit(&mut self, event: Event) {
        self.outbox.push(event);
    }

    /// Participant of the current event, if it is still alive.
    pub fn live_participant(&self, who: Participant) -> Option<Entity> {
        self.event
            .participant(who)
            .filter(|entity| self.world.is_alive(*entity))
    }
}

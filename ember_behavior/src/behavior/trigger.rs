//! Trigger - decides whether a rule is considered for an event.

use ember_core::Entity;
use serde::{Deserialize, Serialize};

use crate::events::{Event, LOOP_EVENT};

/// Event-type match plus an optional participant filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    /// Event type this trigger reacts to, compared exactly.
    pub event_type: String,

    /// When non-empty, one of the event's participants must be listed here.
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl Trigger {
    /// Trigger on every event of `event_type`, whatever its participants.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            entities: Vec::new(),
        }
    }

    /// Trigger on the reserved loop event type.
    pub fn on_loop() -> Self {
        Self::new(LOOP_EVENT)
    }

    /// Restrict the trigger to events involving `entity`.
    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    /// Type must match exactly; with an entity filter, `a` or `b` must be in it.
    pub fn matches(&self, event: &Event) -> bool {
        if event.event_type != self.event_type {
            return false;
        }
        self.entities.is_empty() || self.entities.iter().any(|e| event.involves(*e))
    }

    /// Rules with a loop trigger re-emit their event after running.
    pub fn is_loop(&self) -> bool {
        self.event_type == LOOP_EVENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_match() {
        let trigger = Trigger::new("collision");

        assert!(trigger.matches(&Event::new("collision")));
        assert!(!trigger.matches(&Event::new("Collision")));
        assert!(!trigger.matches(&Event::new("timer")));
    }

    #[test]
    fn test_entity_filter() {
        let trigger = Trigger::new("collision").with_entity(Entity(5));

        assert!(trigger.matches(&Event::new("collision").with_a(Entity(5))));
        assert!(trigger.matches(&Event::new("collision").with_a(Entity(1)).with_b(Entity(5))));
        assert!(!trigger.matches(&Event::new("collision").with_a(Entity(1)).with_b(Entity(2))));
        assert!(!trigger.matches(&Event::new("collision")));
    }

    #[test]
    fn test_loop_trigger() {
        assert!(Trigger::on_loop().is_loop());
        assert!(!Trigger::new("start").is_loop());
    }
}

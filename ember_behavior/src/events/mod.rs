//! Events - the messages rules react to.

use ember_core::Entity;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Event type reserved for self-repeating rules: a rule triggered by it
/// re-emits its event after every successful run.
pub const LOOP_EVENT: &str = "loop";

/// Open-ended extra data carried by an event.
pub type Payload = HashMap<String, Value>;

/// A transient message: a type label, up to two participants and a payload.
///
/// Participants are lookup-only references; an event never keeps an entity
/// alive, and the entity may be dead by the time the event is processed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<Entity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<Entity>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub payload: Payload,
}

impl Event {
    /// Create an event with no participants and an empty payload.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            a: None,
            b: None,
            payload: Payload::new(),
        }
    }

    /// Set the first participant.
    pub fn with_a(mut self, entity: Entity) -> Self {
        self.a = Some(entity);
        self
    }

    /// Set the second participant.
    pub fn with_b(mut self, entity: Entity) -> Self {
        self.b = Some(entity);
        self
    }

    /// Add a payload entry.
    pub fn with_payload(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    /// Check whether either participant slot holds `entity`.
    pub fn involves(&self, entity: Entity) -> bool {
        self.a == Some(entity) || self.b == Some(entity)
    }

    /// Participant in the given slot.
    pub fn participant(&self, who: Participant) -> Option<Entity> {
        match who {
            Participant::A => self.a,
            Participant::B => self.b,
        }
    }

    /// Payload entry by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// Payload entry as an integer. Missing or mistyped keys give `None`.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// Payload entry as a float. Integers are widened.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Payload entry as a string slice.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Payload entry holding an entity id.
    pub fn get_entity(&self, key: &str) -> Option<Entity> {
        self.get(key).and_then(Value::as_u64).map(Entity)
    }

    /// Is this the reserved loop event type?
    pub fn is_loop(&self) -> bool {
        self.event_type == LOOP_EVENT
    }
}

/// One of the two participant slots of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Participant {
    A,
    B,
}

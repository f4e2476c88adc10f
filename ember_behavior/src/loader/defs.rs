//! Serializable scene definitions.

use ember_core::{Position, Sprite, Velocity};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::events::{Participant, Payload};

/// A complete scene: starting entities and the rules acting on them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneDef {
    #[serde(default)]
    pub entities: Vec<EntityDef>,

    #[serde(default)]
    pub rules: Vec<RuleDef>,
}

/// An entity to spawn, with optional built-in components.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityDef {
    /// Scene-local name other definitions use to refer to this entity.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub position: Option<Position>,

    #[serde(default)]
    pub velocity: Option<Velocity>,

    #[serde(default)]
    pub display: Option<Sprite>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerDef {
    pub event: String,

    /// Entity names; empty means any participants.
    #[serde(default)]
    pub entities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDef {
    #[serde(default)]
    pub name: Option<String>,

    pub trigger: TriggerDef,

    #[serde(default)]
    pub conditions: Vec<ConditionDef>,

    #[serde(default)]
    pub actions: Vec<ActionDef>,
}

impl RuleDef {
    /// Every entity name this rule refers to.
    pub fn referenced_names(&self) -> impl Iterator<Item = &String> {
        let from_actions = self.actions.iter().flat_map(|action| {
            let names: Vec<&String> = match action {
                ActionDef::Emit { event } => event.a.iter().chain(event.b.iter()).collect(),
                _ => Vec::new(),
            };
            names
        });
        self.trigger.entities.iter().chain(from_actions)
    }
}

/// Event template; participants are entity names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDef {
    #[serde(rename = "type")]
    pub event_type: String,

    #[serde(default)]
    pub a: Option<String>,

    #[serde(default)]
    pub b: Option<String>,

    #[serde(default)]
    pub payload: Payload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConditionDef {
    AlwaysTrue,
    IsAlive { who: Participant },
    HasTag { who: Participant, tag: String },
    TagCountAtLeast { tag: String, min: usize },
    PayloadEquals { key: String, value: Value },
    Not { condition: Box<ConditionDef> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionDef {
    DebugLog { message: String },
    Emit { event: EventDef },
    AddTag { who: Participant, tag: String },
    RemoveTag { who: Participant, tag: String },
    Destroy { who: Participant },
    Spawn {
        #[serde(default)]
        tags: Vec<String>,
    },
    SetVelocity { who: Participant, x: f64, y: f64 },
}

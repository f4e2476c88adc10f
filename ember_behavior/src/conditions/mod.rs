//! Built-in conditions.
//!
//! Every condition treats a missing or dead participant as a plain `false`.

use serde_json::Value;

use crate::behavior::{Condition, Context};
use crate::events::Participant;

/// Never blocks execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysTrue;

impl Condition for AlwaysTrue {
    fn evaluate(&self, _ctx: &Context<'_>) -> bool {
        true
    }
}

/// The participant exists and has not been destroyed.
#[derive(Debug, Clone, Copy)]
pub struct IsAlive(pub Participant);

impl Condition for IsAlive {
    fn evaluate(&self, ctx: &Context<'_>) -> bool {
        ctx.live_participant(self.0).is_some()
    }
}

/// The participant is alive and carries a tag.
#[derive(Debug, Clone)]
pub struct HasTag {
    pub who: Participant,
    pub tag: String,
}

impl HasTag {
    pub fn new(who: Participant, tag: impl Into<String>) -> Self {
        Self {
            who,
            tag: tag.into(),
        }
    }
}

impl Condition for HasTag {
    fn evaluate(&self, ctx: &Context<'_>) -> bool {
        ctx.live_participant(self.who)
            .is_some_and(|entity| ctx.world.tags().has_tag(entity, &self.tag))
    }
}

/// At least `min` alive entities carry a tag.
#[derive(Debug, Clone)]
pub struct TagCountAtLeast {
    pub tag: String,
    pub min: usize,
}

impl TagCountAtLeast {
    pub fn new(tag: impl Into<String>, min: usize) -> Self {
        Self {
            tag: tag.into(),
            min,
        }
    }
}

impl Condition for TagCountAtLeast {
    fn evaluate(&self, ctx: &Context<'_>) -> bool {
        let alive = ctx
            .world
            .tags()
            .entities_with_tag(&self.tag)
            .into_iter()
            .filter(|entity| ctx.world.is_alive(*entity))
            .count();
        alive >= self.min
    }
}

/// A payload key holds exactly the given value.
#[derive(Debug, Clone)]
pub struct PayloadEquals {
    pub key: String,
    pub value: Value,
}

impl PayloadEquals {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Condition for PayloadEquals {
    fn evaluate(&self, ctx: &Context<'_>) -> bool {
        ctx.event.get(&self.key) == Some(&self.value)
    }
}

/// Inverts another condition.
pub struct Not(pub Box<dyn Condition>);

impl Not {
    pub fn new(inner: impl Condition + 'static) -> Self {
        Self(Box::new(inner))
    }
}

impl Condition for Not {
    fn evaluate(&self, ctx: &Context<'_>) -> bool {
        !self.0.evaluate(ctx)
    }
}

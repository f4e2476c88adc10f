//! Built-in actions.
//!
//! Actions referring to a missing or dead participant do nothing.

use ember_core::Velocity;

use crate::behavior::{Action, Context};
use crate::events::{Event, Participant};

/// Logs a message along with the triggering event. Handy for checking that a rule fires.
#[derive(Debug, Clone)]
pub struct DebugLog {
    pub message: String,
}

impl DebugLog {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Action for DebugLog {
    fn execute(&self, ctx: &mut Context<'_>) {
        tracing::info!(
            rule = %ctx.rule.label(),
            event = %ctx.event.event_type,
            payload = ?ctx.event.payload,
            "{}",
            self.message
        );
    }
}

/// Emits a fixed event, processed on the next update.
#[derive(Debug, Clone)]
pub struct EmitEvent(pub Event);

impl EmitEvent {
    pub fn new(event: Event) -> Self {
        Self(event)
    }
}

impl Action for EmitEvent {
    fn execute(&self, ctx: &mut Context<'_>) {
        ctx.emit(self.0.clone());
    }
}

/// Adds a tag to a participant.
#[derive(Debug, Clone)]
pub struct AddTag {
    pub who: Participant,
    pub tag: String,
}

impl AddTag {
    pub fn new(who: Participant, tag: impl Into<String>) -> Self {
        Self {
            who,
            tag: tag.into(),
        }
    }
}

impl Action for AddTag {
    fn execute(&self, ctx: &mut Context<'_>) {
        if let Some(entity) = ctx.live_participant(self.who) {
            ctx.world.add_tag(entity, &self.tag);
        }
    }
}

/// Removes a tag from a participant.
#[derive(Debug, Clone)]
pub struct RemoveTag {
    pub who: Participant,
    pub tag: String,
}

impl RemoveTag {
    pub fn new(who: Participant, tag: impl Into<String>) -> Self {
        Self {
            who,
            tag: tag.into(),
        }
    }
}

impl Action for RemoveTag {
    fn execute(&self, ctx: &mut Context<'_>) {
        if let Some(entity) = ctx.live_participant(self.who) {
            ctx.world.remove_tag(entity, &self.tag);
        }
    }
}

/// Marks a participant for destruction at the end of the step.
#[derive(Debug, Clone, Copy)]
pub struct DestroyEntity(pub Participant);

impl Action for DestroyEntity {
    fn execute(&self, ctx: &mut Context<'_>) {
        if let Some(entity) = ctx.event.participant(self.0) {
            ctx.world.destroy(entity);
        }
    }
}

/// Creates a new entity with the given tags.
#[derive(Debug, Clone, Default)]
pub struct SpawnEntity {
    pub tags: Vec<String>,
}

impl SpawnEntity {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl Action for SpawnEntity {
    fn execute(&self, ctx: &mut Context<'_>) {
        let entity = ctx.world.spawn(&self.tags);
        tracing::trace!(%entity, rule = %ctx.rule.label(), "spawned entity");
    }
}

/// Overwrites a participant's velocity.
#[derive(Debug, Clone, Copy)]
pub struct SetVelocity {
    pub who: Participant,
    pub x: f64,
    pub y: f64,
}

impl SetVelocity {
    pub fn new(who: Participant, x: f64, y: f64) -> Self {
        Self { who, x, y }
    }
}

impl Action for SetVelocity {
    fn execute(&self, ctx: &mut Context<'_>) {
        if let Some(entity) = ctx.live_participant(self.who) {
            ctx.world.insert(entity, Velocity::new(self.x, self.y));
        }
    }
}

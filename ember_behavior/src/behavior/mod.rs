//! Behaviors - compiled rules and the machinery that runs them.
//!
//! A [`Rule`] is evaluated in four steps for every queued event:
//! 1. **Trigger**: the event type (and optional participant filter) must match
//! 2. **Context**: the world and the event are bundled for the rule body
//! 3. **Conditions**: every condition must pass, in order, stopping at the first failure
//! 4. **Actions**: every action runs, in order, seeing the previous ones' effects

mod context;
mod dispatcher;
mod simulation;
mod trigger;

pub use context::*;
pub use dispatcher::*;
pub use simulation::*;
pub use trigger::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A read-only predicate gating whether a rule's actions run.
pub trait Condition: Send + Sync {
    fn evaluate(&self, ctx: &Context<'_>) -> bool;
}

/// A state change performed when a rule fully matches.
pub trait Action: Send + Sync {
    fn execute(&self, ctx: &mut Context<'_>);
}

/// Unique identifier for rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleId(pub Uuid);

impl RuleId {
    /// Create a new random rule ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RuleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trigger + ordered conditions + ordered actions. Immutable once registered.
pub struct Rule {
    pub id: RuleId,
    pub name: Option<String>,
    pub trigger: Trigger,
    pub conditions: Vec<Box<dyn Condition>>,
    pub actions: Vec<Box<dyn Action>>,
}

impl Rule {
    /// Create a rule with no conditions (always passes) and no actions.
    pub fn new(trigger: Trigger) -> Self {
        Self {
            id: RuleId::new(),
            name: None,
            trigger,
            conditions: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Set a human-readable name, used in logs.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_condition(self, condition: impl Condition + 'static) -> Self {
        self.with_boxed_condition(Box::new(condition))
    }

    pub fn with_boxed_condition(mut self, condition: Box<dyn Condition>) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn with_action(self, action: impl Action + 'static) -> Self {
        self.with_boxed_action(Box::new(action))
    }

    pub fn with_boxed_action(mut self, action: Box<dyn Action>) -> Self {
        self.actions.push(action);
        self
    }

    /// Name if set, otherwise the id.
    pub fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.id.to_string())
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("trigger", &self.trigger)
            .field("conditions", &self.conditions.len())
            .field("actions", &self.actions.len())
            .finish()
    }
}

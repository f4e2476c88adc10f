//! Dispatcher - matches queued events against the rule list.

use ember_core::World;

use super::{Context, Rule};
use crate::events::Event;

/// Counters describing one [`Dispatcher::update`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateSummary {
    /// Events taken from the queue and matched against the rules.
    pub events_processed: usize,

    /// Rules whose conditions all passed and whose actions ran.
    pub rules_fired: usize,
}

/// Holds the rule list and the queue of events waiting for the next pass.
#[derive(Debug, Default)]
pub struct Dispatcher {
    rules: Vec<Rule>,
    queue: Vec<Event>,
}

impl Dispatcher {
    /// Create a dispatcher over a fixed rule list. Rules run in this order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            queue: Vec::new(),
        }
    }

    /// Queue an event. It is processed by the next [`Dispatcher::update`].
    pub fn emit(&mut self, event: Event) {
        self.queue.push(event);
    }

    /// Events waiting for the next pass.
    pub fn pending(&self) -> &[Event] {
        &self.queue
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Process every event queued before this call, in emission order.
    ///
    /// The queue is swapped out first, so anything emitted by actions (and
    /// loop re-emissions) lands in the queue of the next pass.
    pub fn update(&mut self, world: &mut World) -> UpdateSummary {
        let events = std::mem::take(&mut self.queue);
        let mut summary = UpdateSummary::default();
        if events.is_empty() {
            return summary;
        }

        for event in &events {
            summary.events_processed += 1;
            summary.rules_fired += process_event(&self.rules, &mut self.queue, world, event);
        }

        tracing::debug!(
            events = summary.events_processed,
            fired = summary.rules_fired,
            queued = self.queue.len(),
            "dispatcher update"
        );
        summary
    }
}

/// Run every matching rule for one event. Returns how many rules fired.
fn process_event(
    rules: &[Rule],
    queue: &mut Vec<Event>,
    world: &mut World,
    event: &Event,
) -> usize {
    let mut fired = 0;

    for rule in rules {
        if !rule.trigger.matches(event) {
            continue;
        }

        let mut ctx = Context::new(world, event, rule, queue);

        if !rule.conditions.iter().all(|condition| condition.evaluate(&ctx)) {
            tracing::trace!(rule = %rule.label(), event = %event.event_type, "conditions failed");
            continue;
        }

        for action in &rule.actions {
            action.execute(&mut ctx);
        }
        fired += 1;
        tracing::trace!(rule = %rule.label(), event = %event.event_type, "rule fired");

        if rule.trigger.is_loop() {
            queue.push(event.clone());
        }
    }

    fired
}

//! Entity identity, liveness and deferred destruction.

mod tags;

pub use tags::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque identifier for a game object.
///
/// Identifiers come from a per-registry monotonic counter and are never reused,
/// so a stale `Entity` held by an in-flight event can never alias a newer object.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Entity(pub u64);

impl Entity {
    /// Raw counter value of this identifier.
    pub fn id(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns entity allocation, liveness and the tag index.
///
/// Destruction is two-phase: [`Registry::destroy`] flips the liveness flag and
/// queues the entity, [`Registry::cleanup`] purges it at the end of the step.
/// Between the two, the entity reports dead but its tags stay queryable.
#[derive(Debug, Default)]
pub struct Registry {
    next_id: u64,
    alive: HashMap<Entity, bool>,
    pending_deletion: Vec<Entity>,
    alive_count: usize,
    tags: TagIndex,
}

impl Registry {
    /// Create an empty registry. The first entity is `Entity(0)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next identifier and mark it alive.
    pub fn create(&mut self) -> Entity {
        let entity = Entity(self.next_id);
        self.next_id += 1;
        self.alive.insert(entity, true);
        self.alive_count += 1;
        entity
    }

    /// Allocate an entity and attach each of the given tags (normalized).
    pub fn create_with_tags<I, S>(&mut self, tags: I) -> Entity
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entity = self.create();
        for tag in tags {
            self.add_tag(entity, tag.as_ref());
        }
        entity
    }

    /// Tag an entity. Only entities the registry still tracks (alive, or
    /// destroyed but not yet purged) can be tagged; anything else is ignored.
    pub fn add_tag(&mut self, entity: Entity, tag: &str) {
        if self.alive.contains_key(&entity) {
            self.tags.add_tag(entity, tag);
        }
    }

    /// Untag an entity. Unknown entities are ignored.
    pub fn remove_tag(&mut self, entity: Entity, tag: &str) {
        if self.alive.contains_key(&entity) {
            self.tags.remove_tag(entity, tag);
        }
    }

    /// Mark an entity for deletion at the next [`Registry::cleanup`].
    ///
    /// Unknown or already-dead entities are ignored, so repeated calls within a
    /// step queue the entity only once.
    pub fn destroy(&mut self, entity: Entity) {
        let Some(flag) = self.alive.get_mut(&entity) else {
            return;
        };
        if !*flag {
            return;
        }
        *flag = false;
        self.alive_count -= 1;
        self.pending_deletion.push(entity);
        tracing::trace!(%entity, "entity marked for deletion");
    }

    /// True only for entities that exist and have not been destroyed.
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.alive.get(&entity).copied().unwrap_or(false)
    }

    /// Purge every pending entity from the liveness set and the tag index.
    ///
    /// Returns the purged entities in the order they were destroyed so callers
    /// can reclaim data held elsewhere (component stores).
    /// Must run after every reader of the current step is done.
    pub fn cleanup(&mut self) -> Vec<Entity> {
        let purged = std::mem::take(&mut self.pending_deletion);
        for entity in &purged {
            self.alive.remove(entity);
            self.tags.purge(*entity);
        }
        if !purged.is_empty() {
            tracing::debug!(count = purged.len(), "purged destroyed entities");
        }
        purged
    }

    /// Number of alive entities. Destroyed entities stop counting immediately.
    pub fn count(&self) -> usize {
        self.alive_count
    }

    /// Entities destroyed this step and not yet purged.
    pub fn pending_deletion(&self) -> &[Entity] {
        &self.pending_deletion
    }

    /// Read access to the tag index. Writes go through [`Registry::add_tag`]
    /// and [`Registry::remove_tag`].
    pub fn tags(&self) -> &TagIndex {
        &self.tags
    }
}

//! World - the registry and every component store of one simulation.

use crate::components::{Component, Components};
use crate::entities::{Entity, Registry, TagIndex};

/// The complete mutable state a simulation step works on.
#[derive(Debug, Default)]
pub struct World {
    /// Identity, liveness and tags.
    pub registry: Registry,

    /// Component data, one store per type.
    pub components: Components,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entity carrying the given tags.
    pub fn spawn<I, S>(&mut self, tags: I) -> Entity
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.registry.create_with_tags(tags)
    }

    /// Mark an entity for destruction at the end of the step.
    pub fn destroy(&mut self, entity: Entity) {
        self.registry.destroy(entity);
    }

    /// True until the entity is destroyed.
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.registry.is_alive(entity)
    }

    /// Read-only view of the tag index.
    pub fn tags(&self) -> &TagIndex {
        self.registry.tags()
    }

    /// Tag an entity the registry still tracks. Purged or unknown ids are ignored.
    pub fn add_tag(&mut self, entity: Entity, tag: &str) {
        self.registry.add_tag(entity, tag);
    }

    /// Untag an entity. Unknown ids are ignored.
    pub fn remove_tag(&mut self, entity: Entity, tag: &str) {
        self.registry.remove_tag(entity, tag);
    }

    /// Attach a component to an entity.
    pub fn insert<T: Component>(&mut self, entity: Entity, value: T) {
        self.components.insert(entity, value);
    }

    /// Component of an alive entity. Dead entities yield `None` even before cleanup.
    pub fn get_live<T: Component>(&self, entity: Entity) -> Option<&T> {
        if !self.is_alive(entity) {
            return None;
        }
        self.components.get(entity)
    }

    /// Mutable component of an alive entity.
    pub fn get_live_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        if !self.is_alive(entity) {
            return None;
        }
        self.components.get_mut(entity)
    }

    /// Finalize destructions: purge registry and tags, then drop component data.
    pub fn cleanup(&mut self) -> Vec<Entity> {
        let purged = self.registry.cleanup();
        for entity in &purged {
            self.components.remove_entity(*entity);
        }
        purged
    }
}

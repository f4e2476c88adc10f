//! Component storage - one typed store per component type.

mod builtin;
mod container;

pub use builtin::*;
pub use container::*;

use std::collections::HashMap;

use crate::entities::Entity;

/// Anything that can be stored as component data.
pub trait Component: Send + Sync + 'static {}

impl<T: Send + Sync + 'static> Component for T {}

/// Maps entities to owned instances of a single component type.
///
/// The store knows nothing about liveness: removing data for destroyed
/// entities is the caller's job (see [`Components::remove_entity`]).
#[derive(Debug, Clone)]
pub struct ComponentStore<T> {
    data: HashMap<Entity, T>,
}

impl<T> Default for ComponentStore<T> {
    fn default() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<T> ComponentStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a component. Overwrites any previous value (last write wins).
    pub fn add(&mut self, entity: Entity, value: T) {
        self.data.insert(entity, value);
    }

    /// Shared access to an entity's component.
    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.data.get(&entity)
    }

    /// Mutable access to an entity's component.
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.data.get_mut(&entity)
    }

    /// Check whether an entity has this component.
    pub fn has(&self, entity: Entity) -> bool {
        self.data.contains_key(&entity)
    }

    /// Detach a component, returning it if it was present.
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        self.data.remove(&entity)
    }

    /// Visit every entry with mutable access. Order is unspecified.
    pub fn for_each<F>(&mut self, mut f: F)
    where
        F: FnMut(Entity, &mut T),
    {
        for (entity, value) in self.data.iter_mut() {
            f(*entity, value);
        }
    }

    /// Iterate over all entries. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.data.iter().map(|(entity, value)| (*entity, value))
    }

    /// Number of entities holding this component.
    pub fn count(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Health {
        current: i32,
        max: i32,
    }

    #[test]
    fn test_new_store_is_empty() {
        let store: ComponentStore<Position> = ComponentStore::new();
        assert_eq!(store.count(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_and_get() {
        let mut positions = ComponentStore::new();
        let player = Entity(0);

        positions.add(player, Position::new(100.0, 50.0));

        assert_eq!(positions.get(player), Some(&Position::new(100.0, 50.0)));
        assert!(positions.has(player));
        assert!(positions.get(Entity(1)).is_none());
    }

    #[test]
    fn test_get_mut_writes_through() {
        let mut positions = ComponentStore::new();
        let player = Entity(0);
        positions.add(player, Position::new(10.0, 20.0));

        if let Some(pos) = positions.get_mut(player) {
            pos.x = 999.0;
        }

        assert_eq!(positions.get(player).map(|p| p.x), Some(999.0));
    }

    #[test]
    fn test_overwrite_keeps_count() {
        let mut healths = ComponentStore::new();
        let e = Entity(3);

        healths.add(e, Health { current: 10, max: 10 });
        healths.add(e, Health { current: 4, max: 12 });

        assert_eq!(healths.get(e), Some(&Health { current: 4, max: 12 }));
        assert_eq!(healths.count(), 1);
    }

    #[test]
    fn test_remove() {
        let mut healths = ComponentStore::new();
        let e = Entity(0);
        healths.add(e, Health { current: 1, max: 1 });

        assert!(healths.remove(e).is_some());
        assert!(healths.remove(e).is_none());
        assert!(!healths.has(e));
        assert_eq!(healths.count(), 0);
    }

    #[test]
    fn test_for_each_mutates() {
        let mut velocities = ComponentStore::new();
        for id in 0..4 {
            velocities.add(Entity(id), Velocity::new(id as f64, 1.0));
        }

        let mut visited = 0;
        velocities.for_each(|_, vel| {
            vel.y = -vel.y;
            visited += 1;
        });

        assert_eq!(visited, 4);
        assert!(velocities.iter().all(|(_, vel)| vel.y == -1.0));
    }
}

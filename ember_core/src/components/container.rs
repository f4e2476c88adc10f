//! Heterogeneous container holding one [`ComponentStore`] per component type.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use super::{Component, ComponentStore};
use crate::entities::Entity;

/// Object-safe view of a store, used for per-entity cleanup across all types.
trait ErasedStore: Send + Sync {
    fn remove_entity(&mut self, entity: Entity);
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> ErasedStore for ComponentStore<T> {
    fn remove_entity(&mut self, entity: Entity) {
        self.remove(entity);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// All component stores of a world, keyed by the component's Rust type.
///
/// Lookups are typed: asking for a type that was never registered yields
/// `None`, the same as asking a store for an entity it doesn't hold.
#[derive(Default)]
pub struct Components {
    stores: HashMap<TypeId, Box<dyn ErasedStore>>,
}

impl Components {
    /// Create a container with no stores registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a store for `T` exists and return it.
    pub fn register<T: Component>(&mut self) -> &mut ComponentStore<T> {
        let store = self
            .stores
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(ComponentStore::<T>::new()));
        store
            .as_any_mut()
            .downcast_mut::<ComponentStore<T>>()
            .unwrap_or_else(|| unreachable!("store keyed by TypeId of its own type"))
    }

    /// Shared access to the store for `T`, if registered.
    pub fn store<T: Component>(&self) -> Option<&ComponentStore<T>> {
        self.stores
            .get(&TypeId::of::<T>())
            .and_then(|store| store.as_any().downcast_ref())
    }

    /// Mutable access to the store for `T`, if registered.
    pub fn store_mut<T: Component>(&mut self) -> Option<&mut ComponentStore<T>> {
        self.stores
            .get_mut(&TypeId::of::<T>())
            .and_then(|store| store.as_any_mut().downcast_mut())
    }

    /// Attach a component, registering its store on first use.
    pub fn insert<T: Component>(&mut self, entity: Entity, value: T) {
        self.register::<T>().add(entity, value);
    }

    /// Component of type `T` for an entity. `None` if the type was never stored.
    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.store::<T>().and_then(|store| store.get(entity))
    }

    /// Mutable component of type `T` for an entity.
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.store_mut::<T>().and_then(|store| store.get_mut(entity))
    }

    /// True if the entity holds a `T`.
    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.store::<T>().is_some_and(|store| store.has(entity))
    }

    /// Detach one component type from an entity.
    pub fn remove<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.store_mut::<T>().and_then(|store| store.remove(entity))
    }

    /// Detach every component of an entity, across all stores.
    pub fn remove_entity(&mut self, entity: Entity) {
        for store in self.stores.values_mut() {
            store.remove_entity(entity);
        }
    }

    /// Number of registered stores.
    pub fn store_count(&self) -> usize {
        self.stores.len()
    }
}

impl std::fmt::Debug for Components {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Components")
            .field("stores", &self.stores.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Position, Velocity};

    #[test]
    fn test_unregistered_type_is_not_found() {
        let components = Components::new();

        assert!(components.store::<Position>().is_none());
        assert!(components.get::<Position>(Entity(0)).is_none());
        assert!(!components.has::<Position>(Entity(0)));
    }

    #[test]
    fn test_insert_registers_store() {
        let mut components = Components::new();
        let e = Entity(0);

        components.insert(e, Position::new(1.0, 2.0));

        assert_eq!(components.store_count(), 1);
        assert_eq!(components.get::<Position>(e), Some(&Position::new(1.0, 2.0)));
        assert!(components.get::<Velocity>(e).is_none());
    }

    #[test]
    fn test_stores_are_independent() {
        let mut components = Components::new();
        let e = Entity(0);
        components.insert(e, Position::new(0.0, 0.0));
        components.insert(e, Velocity::new(1.0, 1.0));

        components.remove::<Velocity>(e);

        assert!(components.has::<Position>(e));
        assert!(!components.has::<Velocity>(e));
    }

    #[test]
    fn test_remove_entity_clears_all_stores() {
        let mut components = Components::new();
        let e = Entity(0);
        let keep = Entity(1);
        components.insert(e, Position::new(0.0, 0.0));
        components.insert(e, Velocity::new(1.0, 1.0));
        components.insert(keep, Position::new(5.0, 5.0));

        components.remove_entity(e);

        assert!(!components.has::<Position>(e));
        assert!(!components.has::<Velocity>(e));
        assert!(components.has::<Position>(keep));
    }

    #[test]
    fn test_get_mut_through_container() {
        let mut components = Components::new();
        let e = Entity(0);
        components.insert(e, Position::new(0.0, 0.0));

        if let Some(pos) = components.get_mut::<Position>(e) {
            pos.x += 3.0;
        }

        assert_eq!(components.get::<Position>(e).map(|p| p.x), Some(3.0));
    }
}

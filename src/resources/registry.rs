//! Object registry resource.
//!
//! Owns the ordered collection of live game objects. Objects are appended
//! in creation order and that order is stable; it is the canonical
//! iteration order for integration and the canonical pairing order for
//! collision checks. The registry holds no collision logic.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;

/// Ordered registry of live game objects.
///
/// Removal is out of scope for the engine core: objects persist for
/// the engine's lifetime, so the order vector only ever grows.
#[derive(Debug, Default, Resource)]
pub struct ObjectRegistry {
    order: Vec<Entity>,
    by_id: FxHashMap<String, Entity>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an object with this id is already registered.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Append an object. Returns false (and registers nothing) if the id is
    /// already taken; the engine checks before spawning, so a false return
    /// here means a caller bypassed the creation contract.
    pub fn register(&mut self, id: impl Into<String>, entity: Entity) -> bool {
        let id = id.into();
        if self.by_id.contains_key(&id) {
            return false;
        }
        self.by_id.insert(id, entity);
        self.order.push(entity);
        true
    }

    /// Entity backing the given object id.
    pub fn entity_of(&self, id: &str) -> Option<Entity> {
        self.by_id.get(id).copied()
    }

    /// Live objects in creation order, read-only.
    pub fn entities(&self) -> &[Entity] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::World;

    #[test]
    fn test_register_preserves_creation_order() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let c = world.spawn_empty().id();

        let mut registry = ObjectRegistry::new();
        assert!(registry.register("a", a));
        assert!(registry.register("b", b));
        assert!(registry.register("c", c));

        assert_eq!(registry.entities(), &[a, b, c]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_register_rejects_duplicate_id() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();

        let mut registry = ObjectRegistry::new();
        assert!(registry.register("dup", a));
        assert!(!registry.register("dup", b));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.entity_of("dup"), Some(a));
    }

    #[test]
    fn test_entity_of_unknown_id() {
        let registry = ObjectRegistry::new();
        assert_eq!(registry.entity_of("ghost"), None);
        assert!(registry.is_empty());
    }
}

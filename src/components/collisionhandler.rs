//! Per-object collision callback.
//!
//! The handler is invoked synchronously by the collision system for every
//! detected overlap involving the owning object, after resolution, with the
//! other participant's state snapshot and the computed collision data.

use bevy_ecs::prelude::Component;

use crate::events::collision::CollisionData;
use crate::events::snapshot::ObjectSnapshot;

/// Boxed callback signature for collision handlers. Closures may capture
/// context but must be `Send + Sync` to live in ECS storage.
pub type CollisionCallback = Box<dyn FnMut(&ObjectSnapshot, &CollisionData) + Send + Sync>;

#[derive(Component)]
pub struct CollisionHandler(pub CollisionCallback);

impl CollisionHandler {
    pub fn new(callback: impl FnMut(&ObjectSnapshot, &CollisionData) + Send + Sync + 'static) -> Self {
        Self(Box::new(callback))
    }

    pub fn invoke(&mut self, other: &ObjectSnapshot, data: &CollisionData) {
        (self.0)(other, data);
    }
}

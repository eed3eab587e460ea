//! Rendering adapter resource.
//!
//! The engine never writes presentation state directly. Instead, a consumer
//! injects a callback here and the movement and collision systems push an
//! [`ObjectSnapshot`] through it whenever an object's position changes, so
//! a presentation layer can sync visuals. Nothing is read back.

use bevy_ecs::prelude::Resource;

use crate::events::snapshot::ObjectSnapshot;

type AdapterFn = Box<dyn FnMut(&ObjectSnapshot) + Send + Sync>;

/// Injected position-changed callback; absent by default.
#[derive(Default, Resource)]
pub struct RenderAdapter(Option<AdapterFn>);

impl RenderAdapter {
    pub fn set(&mut self, callback: impl FnMut(&ObjectSnapshot) + Send + Sync + 'static) {
        self.0 = Some(Box::new(callback));
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Forward a snapshot to the adapter, if one is installed.
    pub fn publish(&mut self, snapshot: &ObjectSnapshot) {
        if let Some(callback) = self.0.as_mut() {
            callback(snapshot);
        }
    }
}

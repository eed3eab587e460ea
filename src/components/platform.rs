use bevy_ecs::prelude::Component;

/// Marker excluding an object from ground probing: other objects standing
/// on a platform-flagged object do not count as grounded on it.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Platform;

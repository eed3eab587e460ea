use bevy_ecs::prelude::Component;

/// Marker for objects that are never moved by integration or collision
/// resolution. Static objects still participate in collision detection and
/// push non-static objects out of the way.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct StaticBody;

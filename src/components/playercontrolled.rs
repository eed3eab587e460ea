use bevy_ecs::prelude::Component;

/// Marker for objects bound to external input by a consumer.
///
/// The engine implements no input handling itself; it only schedules the
/// one-shot `playerCreated` lifecycle notice for objects carrying this
/// marker.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct PlayerControlled;

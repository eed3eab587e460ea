// Counts down simulated milliseconds and then publishes a one-shot event.
use bevy_ecs::prelude::Component;

/// One-shot deferred event notice attached to an object at creation.
///
/// The notice system decrements `remaining_ms` by each tick's delta and
/// publishes `event` with the object's snapshot when it reaches zero, then
/// removes the component. Removing it earlier cancels the notice.
#[derive(Component, Clone, Debug)]
pub struct PendingNotice {
    pub event: String,
    pub remaining_ms: f32,
}

impl PendingNotice {
    pub fn new(event: impl Into<String>, delay_ms: f32) -> Self {
        Self {
            event: event.into(),
            remaining_ms: delay_ms,
        }
    }
}

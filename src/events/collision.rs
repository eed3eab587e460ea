//! Collision payload types.
//!
//! The collision system emits a [`CollisionEvent`] for every overlapping
//! pair it detects of each tick. Subscribers on the
//! [`EventBus`](crate::resources::eventbus::EventBus) and per-object
//! [`CollisionHandler`](crate::components::collisionhandler::CollisionHandler)
//! callbacks both receive the same [`CollisionData`].

use serde::Serialize;

use super::snapshot::ObjectSnapshot;

/// Side of the first object on which the pair separates.
///
/// Chosen from the axis of least penetration: the horizontal branch wins
/// only when `overlap_x` is strictly smaller than `overlap_y`, so ties
/// route to the vertical variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Top,
    Bottom,
}

/// Ephemeral per-pair collision value: minimum penetration depth along each
/// axis plus the chosen separation direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CollisionData {
    pub overlap_x: f32,
    pub overlap_y: f32,
    pub direction: Direction,
}

/// Event payload published under
/// [`EVENT_COLLISION`](crate::events::EVENT_COLLISION) for each detected
/// pair. `first` and `second` follow registry creation order.
#[derive(Debug, Clone, Serialize)]
pub struct CollisionEvent {
    pub first: ObjectSnapshot,
    pub second: ObjectSnapshot,
    pub data: CollisionData,
}

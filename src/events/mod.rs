//! Event payload types published through the engine's event bus.
//!
//! Events provide the decoupled notification surface between the engine and
//! its consumers: subscribers register callbacks by event name on the
//! [`EventBus`](crate::resources::eventbus::EventBus) and receive payloads
//! synchronously during the tick that produced them.
//!
//! Submodules:
//! - [`collision`] – collision data and the per-pair collision payload
//! - [`snapshot`] – read-only per-object state snapshots
//!
//! Reserved event names produced by the engine are exported as constants
//! below; consumers may publish and subscribe to arbitrary additional names.

pub mod collision;
pub mod snapshot;

use collision::CollisionEvent;
use snapshot::ObjectSnapshot;

/// Published once per player-controlled object, a fixed delay after its
/// creation. Payload: the object's snapshot.
pub const EVENT_PLAYER_CREATED: &str = "playerCreated";

/// Published for every non-static object on every tick. Boundary clamping
/// is disabled, so this is effectively a per-object tick notification.
pub const EVENT_HIT_BOUNDARY: &str = "hitBoundary";

/// Published for every detected overlapping pair on every tick. Payload:
/// both snapshots plus the collision data.
pub const EVENT_COLLISION: &str = "collision";

/// Payload handed to event-bus subscribers.
#[derive(Debug, Clone)]
pub enum EnginePayload {
    /// Lifecycle and per-tick object notifications (`playerCreated`,
    /// `hitBoundary`).
    Object(ObjectSnapshot),
    /// Per-pair collision notification (`collision`).
    Collision(CollisionEvent),
}

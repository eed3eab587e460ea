//! Kinematic body component.
//!
//! Stores the per-object velocity plus the two physics toggles the
//! integrator reads: an optional constant auto-move velocity that overwrites
//! the current velocity at the start of every tick, and the `require_ground`
//! flag that makes the object accelerate downward while airborne.

use bevy_ecs::prelude::Component;

use crate::math::Vec2;

/// Kinematic body storing velocity and integration flags.
///
/// Static objects carry a `RigidBody` too so their velocity is queryable,
/// but the movement and collision systems never write to it.
#[derive(Component, Clone, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vec2,
    /// When set, overwrites `velocity` each tick before integration.
    pub auto_move: Option<Vec2>,
    /// When true and the ground probe finds nothing beneath the object,
    /// gravity acceleration is applied.
    pub require_ground: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a body at rest with no auto-move and no gravity requirement.
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
            auto_move: None,
            require_ground: false,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_at_rest() {
        let rb = RigidBody::new();
        assert_eq!(rb.velocity, Vec2::ZERO);
        assert!(rb.auto_move.is_none());
        assert!(!rb.require_ground);
    }

    #[test]
    fn test_with_velocity() {
        let rb = RigidBody::new().with_velocity(Vec2::new(10.0, -5.0));
        assert_eq!(rb.velocity, Vec2::new(10.0, -5.0));
    }
}

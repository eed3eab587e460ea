//! Ground sensor.
//!
//! An object is grounded when a 1-unit-tall probe rectangle placed directly
//! beneath it intersects any other registered object that is not flagged as
//! a [`Platform`](crate::components::platform::Platform). The probe sits one
//! unit below the object's bottom edge, so resting exactly edge-to-edge
//! still counts: the probe spans `(x, y + h + 1)` with the object's width.

use bevy_ecs::prelude::Entity;

use crate::components::boxcollider::Rect;

pub const GROUND_PROBE_HEIGHT: f32 = 1.0;

/// World rect of an object plus the flags the sensor needs.
#[derive(Debug, Clone, Copy)]
pub struct GroundCandidate {
    pub entity: Entity,
    pub rect: Rect,
    pub is_platform: bool,
}

/// Probe region directly beneath `rect`.
pub fn ground_probe(rect: &Rect) -> Rect {
    Rect::new(
        rect.x,
        rect.y + rect.h + GROUND_PROBE_HEIGHT,
        rect.w,
        GROUND_PROBE_HEIGHT,
    )
}

/// True when the probe beneath `rect` touches another non-platform object.
pub fn is_on_ground(subject: Entity, rect: &Rect, candidates: &[GroundCandidate]) -> bool {
    let probe = ground_probe(rect);
    candidates
        .iter()
        .any(|c| c.entity != subject && !c.is_platform && probe.intersects(&c.rect))
}

//! Physics integrator.
//!
//! Advances every non-static object once per tick, in registry creation
//! order:
//!
//! 1. An `auto_move` velocity, when present, overwrites the current velocity.
//! 2. Objects with `require_ground` that are airborne according to the
//!    ground sensor accelerate downward.
//! 3. Position integrates from velocity and the tick delta (velocity is in
//!    units/second, the delta in milliseconds).
//! 4. A `hitBoundary` event is published for the object. There is no
//!    boundary clamping: the event fires every tick regardless of position
//!    and doubles as a per-object tick notification.
//! 5. The updated snapshot is pushed through the render adapter.
//!
//! Objects later in the order see the updated positions of earlier ones,
//! both here and in the ground probe.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::objectid::ObjectId;
use crate::components::platform::Platform;
use crate::components::rigidbody::RigidBody;
use crate::components::staticbody::StaticBody;
use crate::components::tag::Tag;
use crate::events::snapshot::ObjectSnapshot;
use crate::events::{EVENT_HIT_BOUNDARY, EnginePayload};
use crate::resources::engineconfig::EngineConfig;
use crate::resources::eventbus::EventBus;
use crate::resources::registry::ObjectRegistry;
use crate::resources::renderadapter::RenderAdapter;
use crate::resources::worldtime::WorldTime;
use crate::systems::ground::{GroundCandidate, is_on_ground};

pub fn movement(
    registry: Res<ObjectRegistry>,
    time: Res<WorldTime>,
    config: Res<EngineConfig>,
    mut bus: ResMut<EventBus>,
    mut adapter: ResMut<RenderAdapter>,
    query_meta: Query<(
        &ObjectId,
        &BoxCollider,
        Option<&StaticBody>,
        Option<&Platform>,
        Option<&Tag>,
    )>,
    mut query_body: Query<(&mut MapPosition, &mut RigidBody)>,
) {
    let delta_ms = time.delta_ms;
    let delta_sec = time.delta_seconds();

    // Ground candidates in registry order; entries are refreshed as objects
    // move so later objects probe against current positions.
    let mut candidates: Vec<GroundCandidate> = Vec::with_capacity(registry.len());
    for &entity in registry.entities() {
        let Ok((_, collider, _, platform, _)) = query_meta.get(entity) else {
            continue;
        };
        let Ok((position, _)) = query_body.get(entity) else {
            continue;
        };
        candidates.push(GroundCandidate {
            entity,
            rect: collider.rect(position.pos),
            is_platform: platform.is_some(),
        });
    }

    for &entity in registry.entities() {
        let Ok((id, collider, is_static, _, tag)) = query_meta.get(entity) else {
            continue;
        };
        if is_static.is_some() {
            continue;
        }
        let Ok((mut position, mut body)) = query_body.get_mut(entity) else {
            continue;
        };

        if let Some(auto_move) = body.auto_move {
            body.velocity = auto_move;
        }

        if body.require_ground {
            let rect = collider.rect(position.pos);
            if !is_on_ground(entity, &rect, &candidates) {
                body.velocity.y += config.gravity_accel * (delta_ms / config.gravity_time_scale_ms);
            }
        }

        position.pos += body.velocity.scale_by(delta_sec);
        if let Some(candidate) = candidates.iter_mut().find(|c| c.entity == entity) {
            candidate.rect = collider.rect(position.pos);
        }

        let snapshot = ObjectSnapshot::new(
            id.as_str(),
            position.pos,
            collider.size,
            body.velocity,
            false,
            tag.map(Tag::name),
        );
        bus.publish(EVENT_HIT_BOUNDARY, &EnginePayload::Object(snapshot.clone()));
        adapter.publish(&snapshot);
    }
}

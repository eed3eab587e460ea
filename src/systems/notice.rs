//! Deferred one-shot notice delivery.
//!
//! Counts down [`PendingNotice`](crate::components::pendingnotice::PendingNotice)
//! components by each tick's delta and publishes the configured event with
//! the object's snapshot when the delay elapses. The component is removed
//! after delivery, so each notice fires exactly once; removing it before it
//! elapses cancels the notice.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::objectid::ObjectId;
use crate::components::pendingnotice::PendingNotice;
use crate::components::rigidbody::RigidBody;
use crate::components::staticbody::StaticBody;
use crate::components::tag::Tag;
use crate::events::EnginePayload;
use crate::events::snapshot::ObjectSnapshot;
use crate::resources::eventbus::EventBus;
use crate::resources::worldtime::WorldTime;

pub fn deliver_notices(
    mut commands: Commands,
    time: Res<WorldTime>,
    mut bus: ResMut<EventBus>,
    mut query_notices: Query<(Entity, &ObjectId, &mut PendingNotice)>,
    query_state: Query<(
        &MapPosition,
        &BoxCollider,
        &RigidBody,
        Option<&StaticBody>,
        Option<&Tag>,
    )>,
) {
    for (entity, id, mut notice) in query_notices.iter_mut() {
        notice.remaining_ms -= time.delta_ms;
        if notice.remaining_ms > 0.0 {
            continue;
        }

        if let Ok((position, collider, body, is_static, tag)) = query_state.get(entity) {
            let snapshot = ObjectSnapshot::new(
                id.as_str(),
                position.pos,
                collider.size,
                body.velocity,
                is_static.is_some(),
                tag.map(Tag::name),
            );
            debug!("delivering '{}' notice for object '{}'", notice.event, id.as_str());
            bus.publish(&notice.event, &EnginePayload::Object(snapshot));
        }
        commands.entity(entity).remove::<PendingNotice>();
    }
}

//! Collision detection and resolution.
//!
//! After integration, every unordered pair of objects is checked in
//! registry creation order (single O(n²) pass, deterministic pair order).
//! For an overlapping pair the system:
//!
//! 1. Computes [`CollisionData`]: minimum penetration depth per axis and
//!    the separation direction from the axis of least penetration. The
//!    comparison is strict-less on the x overlap, so equal depths resolve
//!    along the vertical axis.
//! 2. Pushes each non-static participant away from the other along the
//!    separation axis by its full overlap amount and zeroes that velocity
//!    component. Static objects are never moved. Moved objects are
//!    republished through the render adapter.
//! 3. Invokes the first object's collision handler with the second's
//!    snapshot, then the second's handler with the first's, synchronously.
//! 4. Publishes a `collision` event with both snapshots and the data.
//!
//! Resolution is single-pass and not iterated to convergence: resolving a
//! pair can reintroduce overlap with an earlier pair sharing an object.
//! Known limitation, kept as-is.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::{BoxCollider, Rect};
use crate::components::collisionhandler::CollisionHandler;
use crate::components::mapposition::MapPosition;
use crate::components::objectid::ObjectId;
use crate::components::rigidbody::RigidBody;
use crate::components::staticbody::StaticBody;
use crate::components::tag::Tag;
use crate::events::collision::{CollisionData, CollisionEvent, Direction};
use crate::events::snapshot::ObjectSnapshot;
use crate::events::{EVENT_COLLISION, EnginePayload};
use crate::math::Vec2;
use crate::resources::eventbus::EventBus;
use crate::resources::registry::ObjectRegistry;
use crate::resources::renderadapter::RenderAdapter;

/// Working copy of one object's collision state for the pairwise pass.
/// The pass mutates these in place and writes results back to the ECS, so
/// later pairs observe earlier resolutions.
struct BodyState {
    entity: Entity,
    id: String,
    pos: Vec2,
    size: Vec2,
    vel: Vec2,
    is_static: bool,
    tag: Option<String>,
}

impl BodyState {
    fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    fn snapshot(&self) -> ObjectSnapshot {
        ObjectSnapshot {
            id: self.id.clone(),
            position: self.pos,
            size: self.size,
            velocity: self.vel,
            is_static: self.is_static,
            tag: self.tag.clone(),
        }
    }
}

pub fn collision_detector(
    registry: Res<ObjectRegistry>,
    mut bus: ResMut<EventBus>,
    mut adapter: ResMut<RenderAdapter>,
    query_meta: Query<(&ObjectId, &BoxCollider, Option<&StaticBody>, Option<&Tag>)>,
    mut query_body: Query<(&mut MapPosition, &mut RigidBody, Option<&mut CollisionHandler>)>,
) {
    let mut states: Vec<BodyState> = Vec::with_capacity(registry.len());
    for &entity in registry.entities() {
        let Ok((id, collider, is_static, tag)) = query_meta.get(entity) else {
            continue;
        };
        let Ok((position, body, _)) = query_body.get(entity) else {
            continue;
        };
        states.push(BodyState {
            entity,
            id: id.0.clone(),
            pos: position.pos,
            size: collider.size,
            vel: body.velocity,
            is_static: is_static.is_some(),
            tag: tag.map(|t| t.0.clone()),
        });
    }

    let count = states.len();
    for i in 0..count {
        for j in (i + 1)..count {
            let (head, tail) = states.split_at_mut(j);
            let first = &mut head[i];
            let second = &mut tail[0];

            if !first.rect().intersects(&second.rect()) {
                continue;
            }

            let (overlap_x, overlap_y) = first.rect().overlap_depths(&second.rect());
            // Strict-less: equal overlaps route to the vertical branch.
            let horizontal = overlap_x < overlap_y;
            let direction = if horizontal {
                if first.pos.x < second.pos.x {
                    Direction::Left
                } else {
                    Direction::Right
                }
            } else if first.pos.y < second.pos.y {
                Direction::Top
            } else {
                Direction::Bottom
            };
            let data = CollisionData {
                overlap_x,
                overlap_y,
                direction,
            };

            let mut moved_first = false;
            let mut moved_second = false;
            if !(first.is_static && second.is_static) {
                // Push direction for `first`; `second` gets the opposite.
                let away = if horizontal {
                    if first.pos.x < second.pos.x { -1.0 } else { 1.0 }
                } else if first.pos.y < second.pos.y {
                    -1.0
                } else {
                    1.0
                };
                let depth = if horizontal { overlap_x } else { overlap_y };

                if !first.is_static {
                    if horizontal {
                        first.pos.x += away * depth;
                        first.vel.x = 0.0;
                    } else {
                        first.pos.y += away * depth;
                        first.vel.y = 0.0;
                    }
                    moved_first = true;
                }
                if !second.is_static {
                    if horizontal {
                        second.pos.x -= away * depth;
                        second.vel.x = 0.0;
                    } else {
                        second.pos.y -= away * depth;
                        second.vel.y = 0.0;
                    }
                    moved_second = true;
                }
            }

            let snap_first = first.snapshot();
            let snap_second = second.snapshot();
            let (entity_first, entity_second) = (first.entity, second.entity);

            if moved_first {
                if let Ok((mut position, mut body, _)) = query_body.get_mut(entity_first) {
                    position.pos = snap_first.position;
                    body.velocity = snap_first.velocity;
                }
                adapter.publish(&snap_first);
            }
            if moved_second {
                if let Ok((mut position, mut body, _)) = query_body.get_mut(entity_second) {
                    position.pos = snap_second.position;
                    body.velocity = snap_second.velocity;
                }
                adapter.publish(&snap_second);
            }

            if let Ok((_, _, Some(mut handler))) = query_body.get_mut(entity_first) {
                handler.invoke(&snap_second, &data);
            }
            if let Ok((_, _, Some(mut handler))) = query_body.get_mut(entity_second) {
                handler.invoke(&snap_first, &data);
            }

            bus.publish(
                EVENT_COLLISION,
                &EnginePayload::Collision(CollisionEvent {
                    first: snap_first,
                    second: snap_second,
                    data,
                }),
            );
        }
    }
}

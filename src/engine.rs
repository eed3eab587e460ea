//! Engine context.
//!
//! [`Engine`] encapsulates the ECS world (object registry, event bus,
//! timing state) and the per-tick schedule behind one value passed
//! explicitly by the caller; there are no process-wide singletons. An
//! external frame driver calls [`Engine::tick`] with monotonically
//! increasing timestamps and the engine does the rest: time update,
//! integration, collision detection/resolution, and deferred notices.

use bevy_ecs::prelude::*;
use log::debug;
use serde::Deserialize;
use std::fmt;

use crate::components::boxcollider::BoxCollider;
use crate::components::collisionhandler::{CollisionCallback, CollisionHandler};
use crate::components::mapposition::MapPosition;
use crate::components::objectid::ObjectId;
use crate::components::pendingnotice::PendingNotice;
use crate::components::platform::Platform;
use crate::components::playercontrolled::PlayerControlled;
use crate::components::rigidbody::RigidBody;
use crate::components::staticbody::StaticBody;
use crate::components::tag::Tag;
use crate::events::collision::CollisionData;
use crate::events::snapshot::ObjectSnapshot;
use crate::events::{EVENT_PLAYER_CREATED, EnginePayload};
use crate::math::Vec2;
use crate::resources::engineconfig::EngineConfig;
use crate::resources::eventbus::EventBus;
use crate::resources::registry::ObjectRegistry;
use crate::resources::renderadapter::RenderAdapter;
use crate::resources::worldtime::WorldTime;
use crate::systems::collision::collision_detector;
use crate::systems::movement::movement;
use crate::systems::notice::deliver_notices;
use crate::systems::time::update_world_time;

/// Creation failure taxonomy. Physics and collision computations are pure
/// arithmetic and cannot fail; the creation contract is the only fallible
/// surface of the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum SpawnError {
    /// An object with this id is already registered.
    DuplicateId(String),
    /// Collider width and height must both be positive.
    InvalidDimension { width: f32, height: f32 },
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::DuplicateId(id) => write!(f, "object id '{}' is already taken", id),
            SpawnError::InvalidDimension { width, height } => {
                write!(f, "object dimensions must be positive, got {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for SpawnError {}

/// Explicit creation configuration enumerating every recognized field and
/// its default. Deserializable so scenes can come from JSON; the collision
/// callback is the one field that cannot, and defaults to `None` (attach
/// one later with [`Engine::set_collision_handler`]).
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct ObjectConfig {
    /// Top-left corner, defaults to the origin.
    pub position: Vec2,
    /// Collider extent; both components must be positive.
    pub size: Vec2,
    pub velocity: Vec2,
    /// Constant velocity override applied every tick before integration.
    pub auto_move: Option<Vec2>,
    pub is_static: bool,
    pub player_controlled: bool,
    /// Apply gravity while the ground probe finds nothing beneath.
    pub require_ground: bool,
    /// Exclude this object from other objects' ground probes.
    pub platform: bool,
    pub tag: Option<String>,
    #[serde(skip)]
    pub on_collision: Option<CollisionCallback>,
}

impl ObjectConfig {
    /// Start a config with the mandatory collider size.
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            ..Self::default()
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    pub fn with_velocity(mut self, x: f32, y: f32) -> Self {
        self.velocity = Vec2::new(x, y);
        self
    }

    pub fn with_auto_move(mut self, x: f32, y: f32) -> Self {
        self.auto_move = Some(Vec2::new(x, y));
        self
    }

    pub fn static_body(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn platform(mut self) -> Self {
        self.platform = true;
        self
    }

    pub fn player_controlled(mut self) -> Self {
        self.player_controlled = true;
        self
    }

    pub fn require_ground(mut self) -> Self {
        self.require_ground = true;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn on_collision(
        mut self,
        callback: impl FnMut(&ObjectSnapshot, &CollisionData) + Send + Sync + 'static,
    ) -> Self {
        self.on_collision = Some(Box::new(callback));
        self
    }
}

/// The simulation engine: object registry, event bus, timing state, and
/// the per-tick schedule, owned together.
pub struct Engine {
    world: World,
    schedule: Schedule,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::new())
    }

    /// Engine with explicit configuration (typically loaded from INI).
    pub fn with_config(config: EngineConfig) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            time_scale: config.time_scale,
            ..WorldTime::default()
        });
        world.insert_resource(config);
        world.insert_resource(ObjectRegistry::new());
        world.insert_resource(EventBus::new());
        world.insert_resource(RenderAdapter::default());

        let mut schedule = Schedule::default();
        schedule.add_systems((
            movement,
            collision_detector.after(movement),
            deliver_notices.after(collision_detector),
        ));

        Self { world, schedule }
    }

    /// Create a game object and append it to the registry.
    ///
    /// Creation is purely logical: whether any visual backing exists for
    /// `id` is a presentation-layer concern and never affects the result.
    pub fn create_object(
        &mut self,
        id: impl Into<String>,
        config: ObjectConfig,
    ) -> Result<Entity, SpawnError> {
        let id = id.into();
        if config.size.x <= 0.0 || config.size.y <= 0.0 {
            return Err(SpawnError::InvalidDimension {
                width: config.size.x,
                height: config.size.y,
            });
        }
        if self.world.resource::<ObjectRegistry>().contains(&id) {
            return Err(SpawnError::DuplicateId(id));
        }

        let notice_delay = self.world.resource::<EngineConfig>().player_notice_delay_ms;
        let body = RigidBody {
            velocity: config.velocity,
            auto_move: config.auto_move,
            require_ground: config.require_ground,
        };

        let mut entity = self.world.spawn((
            ObjectId(id.clone()),
            MapPosition { pos: config.position },
            BoxCollider { size: config.size },
            body,
        ));
        if config.is_static {
            entity.insert(StaticBody);
        }
        if config.platform {
            entity.insert(Platform);
        }
        if let Some(tag) = config.tag {
            entity.insert(Tag(tag));
        }
        if config.player_controlled {
            entity.insert(PlayerControlled);
            entity.insert(PendingNotice::new(EVENT_PLAYER_CREATED, notice_delay));
        }
        if let Some(callback) = config.on_collision {
            entity.insert(CollisionHandler(callback));
        }
        let entity = entity.id();

        self.world
            .resource_mut::<ObjectRegistry>()
            .register(id.as_str(), entity);
        debug!("created object '{}'", id);
        Ok(entity)
    }

    /// Advance the simulation by one frame.
    ///
    /// `timestamp_ms` must increase monotonically across calls; the delta
    /// is computed against the previous timestamp (initially 0, so the
    /// first tick's delta equals the first timestamp).
    pub fn tick(&mut self, timestamp_ms: f32) {
        update_world_time(&mut self.world, timestamp_ms);
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// Subscribe a callback to an event name. Reserved engine events are
    /// listed in [`crate::events`]; arbitrary names are allowed.
    pub fn subscribe(
        &mut self,
        event: &str,
        callback: impl FnMut(&EnginePayload) + Send + Sync + 'static,
    ) {
        self.world.resource_mut::<EventBus>().subscribe(event, callback);
    }

    /// Publish an event through the bus outside the tick flow.
    pub fn publish(&mut self, event: &str, payload: &EnginePayload) {
        self.world.resource_mut::<EventBus>().publish(event, payload);
    }

    /// Install the rendering adapter invoked on every position change.
    pub fn set_render_adapter(
        &mut self,
        callback: impl FnMut(&ObjectSnapshot) + Send + Sync + 'static,
    ) {
        self.world.resource_mut::<RenderAdapter>().set(callback);
    }

    /// Attach or replace the collision handler of an existing object.
    pub fn set_collision_handler(
        &mut self,
        id: &str,
        callback: impl FnMut(&ObjectSnapshot, &CollisionData) + Send + Sync + 'static,
    ) -> bool {
        let Some(entity) = self.world.resource::<ObjectRegistry>().entity_of(id) else {
            return false;
        };
        self.world
            .entity_mut(entity)
            .insert(CollisionHandler::new(callback));
        true
    }

    /// Cancel a pending deferred notice (e.g. `playerCreated`) for an
    /// object. Returns true when a notice was actually pending.
    pub fn cancel_notice(&mut self, id: &str) -> bool {
        let Some(entity) = self.world.resource::<ObjectRegistry>().entity_of(id) else {
            return false;
        };
        if self.world.get::<PendingNotice>(entity).is_none() {
            return false;
        }
        self.world.entity_mut(entity).remove::<PendingNotice>();
        true
    }

    pub fn object_count(&self) -> usize {
        self.world.resource::<ObjectRegistry>().len()
    }

    /// State snapshot of one object by id.
    pub fn snapshot(&self, id: &str) -> Option<ObjectSnapshot> {
        let entity = self.world.resource::<ObjectRegistry>().entity_of(id)?;
        self.snapshot_of(entity)
    }

    /// Snapshots of all objects in creation order.
    pub fn snapshots(&self) -> Vec<ObjectSnapshot> {
        self.world
            .resource::<ObjectRegistry>()
            .entities()
            .iter()
            .filter_map(|&entity| self.snapshot_of(entity))
            .collect()
    }

    /// Snapshots of the objects carrying the given tag, in creation order.
    pub fn snapshots_by_tag(&self, tag: &str) -> Vec<ObjectSnapshot> {
        self.snapshots()
            .into_iter()
            .filter(|s| s.tag.as_deref() == Some(tag))
            .collect()
    }

    fn snapshot_of(&self, entity: Entity) -> Option<ObjectSnapshot> {
        let id = self.world.get::<ObjectId>(entity)?;
        let position = self.world.get::<MapPosition>(entity)?;
        let collider = self.world.get::<BoxCollider>(entity)?;
        let body = self.world.get::<RigidBody>(entity)?;
        let is_static = self.world.get::<StaticBody>(entity).is_some();
        let tag = self.world.get::<Tag>(entity).map(|t| t.0.clone());
        Some(ObjectSnapshot {
            id: id.0.clone(),
            position: position.pos,
            size: collider.size,
            velocity: body.velocity,
            is_static,
            tag,
        })
    }
}

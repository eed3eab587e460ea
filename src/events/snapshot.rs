//! Read-only object state snapshots.
//!
//! The engine never exposes mutable object state to consumers; rendering
//! adapters, event subscribers, and collision callbacks all receive an
//! [`ObjectSnapshot`] copied from the ECS at publication time.

use serde::Serialize;

use crate::math::Vec2;

/// Per-object state view consumed by presentation layers and callbacks.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectSnapshot {
    pub id: String,
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    pub is_static: bool,
    pub tag: Option<String>,
}

impl ObjectSnapshot {
    pub fn new(
        id: &str,
        position: Vec2,
        size: Vec2,
        velocity: Vec2,
        is_static: bool,
        tag: Option<&str>,
    ) -> Self {
        Self {
            id: id.to_string(),
            position,
            size,
            velocity,
            is_static,
            tag: tag.map(str::to_string),
        }
    }
}

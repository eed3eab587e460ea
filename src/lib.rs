//! Rect Engine library.
//!
//! A minimal 2D AABB physics/collision engine built on bevy_ecs. The
//! engine owns a set of rectangular game objects, advances them each tick,
//! resolves overlaps, and notifies subscribers through a name-keyed event
//! bus. Rendering, input, and frame scheduling are external collaborators;
//! see [`engine::Engine`] for the public surface.

pub mod components;
pub mod engine;
pub mod events;
pub mod math;
pub mod resources;
pub mod systems;

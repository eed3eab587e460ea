//! ECS components for game objects.
//!
//! This module groups all component types that can be attached to objects in
//! the engine world. Components define data such as position, collision
//! extent, velocity, and classification.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned rectangular collider and AABB geometry
//! - [`collisionhandler`] – per-object collision callback closure
//! - [`mapposition`] – world-space position (top-left corner) of an object
//! - [`objectid`] – stable unique string identifier
//! - [`pendingnotice`] – one-shot deferred lifecycle event countdown
//! - [`platform`] – marker excluding an object from ground probing
//! - [`playercontrolled`] – marker for externally input-bound objects
//! - [`rigidbody`] – velocity, auto-move, and gravity requirement
//! - [`staticbody`] – marker for immovable objects
//! - [`tag`] – free-form classification label

pub mod boxcollider;
pub mod collisionhandler;
pub mod mapposition;
pub mod objectid;
pub mod pendingnotice;
pub mod platform;
pub mod playercontrolled;
pub mod rigidbody;
pub mod staticbody;
pub mod tag;

//! Engine systems.
//!
//! This module groups the ECS systems that advance the simulation each
//! tick, in the order the engine schedule runs them.
//!
//! Submodules overview
//! - [`time`] – update simulation time and delta from driver timestamps
//! - [`ground`] – probe-based ground detection used by the integrator
//! - [`movement`] – integrate positions from velocities, gravity, auto-move
//! - [`collision`] – pairwise overlap detection, resolution, and events
//! - [`notice`] – deliver delayed one-shot lifecycle notices

pub mod collision;
pub mod ground;
pub mod movement;
pub mod notice;
pub mod time;

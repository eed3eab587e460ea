//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `engineconfig` – physics/event tunables with INI overrides
//! - `eventbus` – name-keyed synchronous publish/subscribe bus
//! - `registry` – ordered collection of live game objects
//! - `renderadapter` – injected position-changed callback
//! - `worldtime` – simulation time and delta

pub mod engineconfig;
pub mod eventbus;
pub mod registry;
pub mod renderadapter;
pub mod worldtime;

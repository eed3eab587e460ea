use bevy_ecs::prelude::Resource;

/// Simulation time resource, in milliseconds.
///
/// The frame driver supplies monotonically increasing timestamps to
/// [`Engine::tick`](crate::engine::Engine::tick); the delta is the
/// difference against the previous timestamp, scaled by `time_scale`.
/// The previous timestamp starts at 0, so the very first tick's delta
/// equals the first timestamp; drivers that care should start their
/// timestamps near zero.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Timestamp supplied by the previous tick, in ms.
    pub last_timestamp_ms: f32,
    /// Scaled delta of the current tick, in ms.
    pub delta_ms: f32,
    /// Accumulated scaled time, in ms.
    pub elapsed_ms: f32,
    /// Multiplier applied to raw deltas. 1.0 leaves wall deltas untouched.
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            last_timestamp_ms: 0.0,
            delta_ms: 0.0,
            elapsed_ms: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    /// Current delta converted to seconds, the unit velocities use.
    pub fn delta_seconds(&self) -> f32 {
        self.delta_ms / 1000.0
    }
}

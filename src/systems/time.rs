//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame from the frame driver's timestamp, applying
//! `time_scale` to the raw delta.

use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance `WorldTime` from the timestamp supplied by the frame driver.
///
/// `timestamp_ms` is expected to increase monotonically across calls. The
/// delta is the difference against the previously supplied timestamp; since
/// the previous timestamp starts at 0, the first tick's delta equals the
/// first timestamp.
pub fn update_world_time(world: &mut World, timestamp_ms: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_delta = (timestamp_ms - wt.last_timestamp_ms) * wt.time_scale;
    wt.last_timestamp_ms = timestamp_ms;
    wt.delta_ms = scaled_delta;
    wt.elapsed_ms += scaled_delta;
    wt.frame_count += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_is_difference_of_timestamps() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());

        update_world_time(&mut world, 16.0);
        assert_eq!(world.resource::<WorldTime>().delta_ms, 16.0);

        update_world_time(&mut world, 48.0);
        let wt = world.resource::<WorldTime>();
        assert_eq!(wt.delta_ms, 32.0);
        assert_eq!(wt.elapsed_ms, 48.0);
        assert_eq!(wt.frame_count, 2);
    }

    #[test]
    fn test_first_tick_delta_equals_first_timestamp() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());

        update_world_time(&mut world, 500.0);
        assert_eq!(world.resource::<WorldTime>().delta_ms, 500.0);
    }

    #[test]
    fn test_time_scale_scales_delta() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            time_scale: 0.5,
            ..WorldTime::default()
        });

        update_world_time(&mut world, 100.0);
        assert_eq!(world.resource::<WorldTime>().delta_ms, 50.0);
    }
}

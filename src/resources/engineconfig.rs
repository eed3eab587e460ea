//! Engine configuration resource.
//!
//! Physics and event tunables with safe defaults, optionally overridden
//! from an INI configuration file.
//!
//! # Configuration File Format
//!
//! ```ini
//! [physics]
//! gravity_accel = 500.0
//! gravity_time_scale_ms = 500.0
//!
//! [events]
//! player_notice_delay_ms = 1000.0
//!
//! [time]
//! time_scale = 1.0
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup.
///
/// Gravity is an acceleration-per-ms relationship:
/// `velocity.y += GRAVITY_ACCEL * (delta_ms / GRAVITY_TIME_SCALE_MS)`,
/// which with the 500/500 defaults adds the tick delta directly to the
/// vertical velocity. Not clamped.
const DEFAULT_GRAVITY_ACCEL: f32 = 500.0;
const DEFAULT_GRAVITY_TIME_SCALE_MS: f32 = 500.0;
const DEFAULT_PLAYER_NOTICE_DELAY_MS: f32 = 1000.0;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./engine.ini";

/// Engine configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct EngineConfig {
    /// Gravity acceleration in world units per second, per time-scale unit.
    pub gravity_accel: f32,
    /// Milliseconds of tick delta over which one `gravity_accel` is applied.
    pub gravity_time_scale_ms: f32,
    /// Simulated delay before `playerCreated` fires for a new object.
    pub player_notice_delay_ms: f32,
    /// Initial time scale installed into `WorldTime`.
    pub time_scale: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            gravity_accel: DEFAULT_GRAVITY_ACCEL,
            gravity_time_scale_ms: DEFAULT_GRAVITY_TIME_SCALE_MS,
            player_notice_delay_ms: DEFAULT_PLAYER_NOTICE_DELAY_MS,
            time_scale: DEFAULT_TIME_SCALE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [physics] section
        if let Some(accel) = config.getfloat("physics", "gravity_accel").ok().flatten() {
            self.gravity_accel = accel as f32;
        }
        if let Some(scale) = config
            .getfloat("physics", "gravity_time_scale_ms")
            .ok()
            .flatten()
        {
            self.gravity_time_scale_ms = scale as f32;
        }

        // [events] section
        if let Some(delay) = config
            .getfloat("events", "player_notice_delay_ms")
            .ok()
            .flatten()
        {
            self.player_notice_delay_ms = delay as f32;
        }

        // [time] section
        if let Some(scale) = config.getfloat("time", "time_scale").ok().flatten() {
            self.time_scale = scale as f32;
        }

        info!(
            "Loaded config: gravity={}/{}ms, player notice delay={}ms, time_scale={}",
            self.gravity_accel,
            self.gravity_time_scale_ms,
            self.player_notice_delay_ms,
            self.time_scale
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::new();
        assert_eq!(config.gravity_accel, 500.0);
        assert_eq!(config.gravity_time_scale_ms, 500.0);
        assert_eq!(config.player_notice_delay_ms, 1000.0);
        assert_eq!(config.time_scale, 1.0);
    }

    #[test]
    fn test_load_missing_file_keeps_defaults() {
        let mut config = EngineConfig::with_path("./does-not-exist.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.gravity_accel, 500.0);
    }
}

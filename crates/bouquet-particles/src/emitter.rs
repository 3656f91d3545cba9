//! Emitter configuration (parsed from TOML)

use bouquet_core::{BouquetError, Result};
use serde::{Deserialize, Serialize};

/// Hard ceiling on `max_particles` accepted from config
pub const MAX_POOL_CAPACITY: usize = 10_000;

/// Configuration for one emitter, read from the `[particles]` table of the
/// arrangement config
///
/// Speeds and gravity are per tick, not per second: particles move by
/// `velocity` every frame regardless of frame length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// Probability of emitting one particle on a given tick
    pub spawn_chance: f32,
    /// Subtracted from `velocity.y` every tick
    pub gravity: f32,
    /// Cube edge length
    pub size: f32,
    /// Seconds
    pub lifetime: f32,
    /// Pool capacity; spawns beyond it are dropped
    pub max_particles: usize,
    /// Initial x/z velocity is drawn from `[-horizontal_speed, horizontal_speed]`
    pub horizontal_speed: f32,
    /// Initial y velocity is drawn from `[0, vertical_speed]`
    pub vertical_speed: f32,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            spawn_chance: 0.1,
            gravity: 0.01,
            size: 0.05,
            lifetime: 2.0,
            max_particles: 128,
            horizontal_speed: 0.01,
            vertical_speed: 0.02,
        }
    }
}

impl EmitterConfig {
    pub fn validate(&self) -> Result<()> {
        check_range("particles.spawn_chance", self.spawn_chance, 0.0, 1.0)?;
        check_range("particles.gravity", self.gravity, 0.0, 1.0)?;
        check_range("particles.size", self.size, f32::EPSILON, 10.0)?;
        check_range("particles.lifetime", self.lifetime, f32::EPSILON, 600.0)?;
        check_range("particles.horizontal_speed", self.horizontal_speed, 0.0, 1.0)?;
        check_range("particles.vertical_speed", self.vertical_speed, 0.0, 1.0)?;
        if self.max_particles == 0 || self.max_particles > MAX_POOL_CAPACITY {
            return Err(BouquetError::out_of_range(
                "particles.max_particles",
                1.0,
                MAX_POOL_CAPACITY as f64,
                self.max_particles as f64,
            ));
        }
        Ok(())
    }
}

fn check_range(field: &str, value: f32, min: f32, max: f32) -> Result<()> {
    // NaN fails both comparisons and is rejected too
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(BouquetError::out_of_range(field, min as f64, max as f64, value as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let config = EmitterConfig::default();
        assert!(config.spawn_chance > 0.0);
        assert!(config.lifetime > 0.0);
        assert!(config.max_particles > 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let config = EmitterConfig {
            spawn_chance: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EmitterConfig {
            max_particles: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_particles"));

        let config = EmitterConfig {
            lifetime: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

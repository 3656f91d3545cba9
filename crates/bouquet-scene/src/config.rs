//! Arrangement configuration loaded from `bouquet.toml`

use crate::flower::FlowerLayout;
use crate::heart::HeartLayout;
use crate::vase::VaseLayout;
use crate::water::WaterLayout;
use bouquet_core::{BouquetError, Result};
use bouquet_particles::EmitterConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Upper bound on generated flowers or hearts
pub const MAX_INSTANCES: usize = 1000;

/// Every tunable of the arrangement. Missing tables and fields take defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrangementConfig {
    /// Fixed seed for reproducible layouts; random when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub flowers: FlowerLayout,
    pub vase: VaseLayout,
    pub water: WaterLayout,
    pub hearts: HeartLayout,
    pub particles: EmitterConfig,
}

impl ArrangementConfig {
    /// Load and validate a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let f = &self.flowers;
        check_count("flowers.count", f.count, 0, MAX_INSTANCES)?;
        check_range("flowers.base_radius", f.base_radius, 0.0, 100.0)?;
        check_range("flowers.height_range", f.height_range, 0.0, 100.0)?;
        check_range("flowers.jitter", f.jitter, 0.0, 10.0)?;
        check_range("flowers.vertical_offset", f.vertical_offset, -100.0, 100.0)?;
        check_range("flowers.scale_min", f.scale_min, f32::EPSILON, 100.0)?;
        check_range("flowers.scale_max", f.scale_max, f.scale_min, 100.0)?;

        let v = &self.vase;
        check_count("vase.layers", v.layers, 1, 64)?;
        check_count("vase.blocks_per_layer", v.blocks_per_layer, 1, 360)?;
        check_range("vase.block_size", v.block_size, f32::EPSILON, 10.0)?;
        check_range("vase.radius", v.radius, 0.0, 100.0)?;
        check_range("vase.taper", v.taper, 0.0, 100.0)?;
        check_range("vase.top", v.top, -100.0, 100.0)?;
        check_range("vase.base_radius", v.base_radius, 0.0, 100.0)?;
        if !(0..=64).contains(&v.base_extent) {
            return Err(BouquetError::out_of_range("vase.base_extent", 0.0, 64.0, v.base_extent as f64));
        }

        let w = &self.water;
        check_range("water.level", w.level, -100.0, 100.0)?;
        check_range("water.radius", w.radius, 0.0, 100.0)?;
        if !(0..=64).contains(&w.extent) {
            return Err(BouquetError::out_of_range("water.extent", 0.0, 64.0, w.extent as f64));
        }

        let h = &self.hearts;
        check_count("hearts.count", h.count, 0, MAX_INSTANCES)?;
        check_range("hearts.radius", h.radius, 0.0, 100.0)?;
        check_range("hearts.height", h.height, 0.0, 100.0)?;
        check_range("hearts.scale_min", h.scale_min, f32::EPSILON, 100.0)?;
        check_range("hearts.scale_max", h.scale_max, h.scale_min, 100.0)?;

        self.particles.validate()
    }
}

fn check_range(field: &str, value: f32, min: f32, max: f32) -> Result<()> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(BouquetError::out_of_range(field, min as f64, max as f64, value as f64))
    }
}

fn check_count(field: &str, value: usize, min: usize, max: usize) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(BouquetError::out_of_range(field, min as f64, max as f64, value as f64))
    }
}

pub mod build;
pub mod frame;
pub mod init;
pub mod simulate;

use anyhow::{Context, Result};
use bouquet_scene::ArrangementConfig;
use std::path::Path;

/// Config picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG: &str = "bouquet.toml";

/// Load the arrangement config and apply a seed override.
///
/// Falls back to `./bouquet.toml`, then to built-in defaults.
pub fn load_config(path: Option<&str>, seed: Option<u64>) -> Result<ArrangementConfig> {
    let mut config = match path {
        Some(p) => ArrangementConfig::load(p)
            .with_context(|| format!("Failed to load config '{}'", p))?,
        None if Path::new(DEFAULT_CONFIG).exists() => ArrangementConfig::load(DEFAULT_CONFIG)
            .with_context(|| format!("Failed to load config '{}'", DEFAULT_CONFIG))?,
        None => ArrangementConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    Ok(config)
}

/// Reject non-finite or non-positive rates and durations
pub fn check_positive(name: &str, value: f64) -> Result<()> {
    if !(value.is_finite() && value > 0.0) {
        anyhow::bail!("--{} must be a positive number, got {}", name, value);
    }
    Ok(())
}

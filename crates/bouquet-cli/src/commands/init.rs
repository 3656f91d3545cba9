//! Config initialization command

use anyhow::{Context, Result};
use bouquet_scene::ArrangementConfig;
use std::fs;
use std::path::Path;

pub fn run(path: &str, force: bool) -> Result<()> {
    let target = Path::new(path);

    if target.exists() && !force {
        anyhow::bail!("'{}' already exists (use --force to overwrite)", path);
    }

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    let content = ArrangementConfig::default()
        .to_toml_string()
        .context("Failed to serialize default config")?;
    fs::write(target, content).with_context(|| format!("Failed to write '{}'", path))?;

    println!("Created arrangement config: {}", path);
    println!();
    println!("Next steps:");
    println!("  bouquet build --config {}", path);
    println!("  bouquet simulate --config {} --seconds 3", path);

    Ok(())
}

//! Generate an arrangement and print its layout

use super::load_config;
use anyhow::{Context, Result};
use bouquet_scene::FlowerArrangement;
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BuildFormat {
    Text,
    Json,
}

pub fn run(config: Option<&str>, seed: Option<u64>, format: BuildFormat) -> Result<()> {
    let config = load_config(config, seed)?;
    let arrangement = FlowerArrangement::new(config);
    let summary = arrangement.summary();

    match format {
        BuildFormat::Json => {
            let output = serde_json::json!({
                "seed": arrangement.config().seed,
                "summary": summary,
                "flowers": arrangement.flowers(),
                "hearts": arrangement.hearts(),
            });
            let text = serde_json::to_string_pretty(&output).context("Failed to serialize layout")?;
            println!("{}", text);
        }
        BuildFormat::Text => {
            println!(
                "Flowers: {} ({} roses, {} daisies, {} tulips)",
                summary.flowers, summary.roses, summary.daisies, summary.tulips
            );
            println!("Hearts: {}", summary.hearts);
            println!("Vase blocks: {}", summary.vase_blocks);
            println!("Water blocks: {}", summary.water_blocks);
            println!("Emitters: {}", summary.emitters);

            if !arrangement.flowers().is_empty() {
                println!();
                println!("{:<4} {:<6} {:<10} {:>24} {:>6}", "#", "kind", "color", "position", "scale");
                for (i, f) in arrangement.flowers().iter().enumerate() {
                    let pos = format!("{:.2}, {:.2}, {:.2}", f.position.x, f.position.y, f.position.z);
                    println!(
                        "{:<4} {:<6} {:<10} {:>24} {:>6.2}",
                        i,
                        f.kind.name(),
                        f.color.to_string(),
                        pos,
                        f.scale.x
                    );
                }
            }
        }
    }

    Ok(())
}

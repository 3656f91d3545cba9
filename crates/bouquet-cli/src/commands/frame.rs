//! Write one flattened frame as JSON or OBJ

use super::{check_positive, load_config};
use anyhow::{Context, Result};
use bouquet_render::{pack_instances, write_obj, Camera};
use bouquet_runtime::FrameLoop;
use bouquet_scene::FlowerArrangement;
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FrameFormat {
    Json,
    Obj,
}

pub struct FrameArgs {
    pub config: Option<String>,
    pub seed: Option<u64>,
    pub time: f64,
    pub hz: f64,
    pub format: FrameFormat,
    pub output: Option<String>,
    pub distance: Option<f32>,
    pub azimuth: Option<f32>,
    pub polar: Option<f32>,
    pub aspect: Option<f32>,
}

pub fn run(args: FrameArgs) -> Result<()> {
    if !(args.time.is_finite() && args.time >= 0.0) {
        anyhow::bail!("--time must be a non-negative number, got {}", args.time);
    }
    check_positive("hz", args.hz)?;

    let config = load_config(args.config.as_deref(), args.seed)?;
    let mut arrangement = FlowerArrangement::new(config);

    // Particles are stateful, so reaching `time` means simulating up to it
    let mut frame_loop = FrameLoop::new();
    let frames = (args.time * args.hz).round() as u64;
    frame_loop.run_fixed(&mut arrangement, args.hz, frames, |_, _| Ok(()))?;

    let t = args.time as f32;
    let cuboids = arrangement.frame(t).flatten();
    tracing::info!(
        time = args.time,
        cuboids = cuboids.len(),
        live_particles = arrangement.live_particles(),
        "frame composed"
    );

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create '{}'", path))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        FrameFormat::Obj => {
            write_obj(&cuboids, &mut out).context("Failed to write OBJ")?;
        }
        FrameFormat::Json => {
            let camera = camera_for(&args);
            let batches = pack_instances(&cuboids);
            let output = serde_json::json!({
                "time": args.time,
                "camera": {
                    "position": camera.position,
                    "target": camera.target,
                    "fov": camera.fov,
                    "view": camera.view_matrix(),
                    "projection": camera.projection_matrix(),
                    "view_projection": camera.view_projection_matrix(),
                },
                "opaque": batches.opaque.len(),
                "transparent": batches.transparent.len(),
                "cuboids": cuboids,
            });
            serde_json::to_writer_pretty(&mut out, &output).context("Failed to write JSON")?;
            writeln!(out)?;
        }
    }
    out.flush().context("Failed to flush output")?;
    frame_loop.finish(&mut arrangement)?;

    if let Some(path) = &args.output {
        println!("Wrote {} cuboids to {}", cuboids.len(), path);
    }
    Ok(())
}

fn camera_for(args: &FrameArgs) -> Camera {
    let mut camera = Camera::new();
    if let Some(aspect) = args.aspect {
        camera.aspect = aspect;
    }
    let distance = args.distance.unwrap_or(camera.distance);
    let azimuth = args.azimuth.map(f32::to_radians).unwrap_or(camera.azimuth);
    let polar = args.polar.map(f32::to_radians).unwrap_or(camera.polar);
    camera.set_orbit(distance, azimuth, polar);
    camera
}

//! Fixed-rate simulation reporting particle counts

use super::{check_positive, load_config};
use anyhow::Result;
use bouquet_runtime::FrameLoop;
use bouquet_scene::FlowerArrangement;

pub struct SimulateArgs {
    pub config: Option<String>,
    pub seed: Option<u64>,
    pub seconds: f64,
    pub hz: f64,
}

pub fn run(args: SimulateArgs) -> Result<()> {
    check_positive("seconds", args.seconds)?;
    check_positive("hz", args.hz)?;

    let config = load_config(args.config.as_deref(), args.seed)?;
    let mut arrangement = FlowerArrangement::new(config);
    let mut frame_loop = FrameLoop::new();

    let frames = (args.seconds * args.hz).round() as u64;
    let report_every = (args.hz.round() as u64).max(1);
    let capacity: usize = arrangement
        .emitters()
        .iter()
        .map(|e| e.pool().capacity())
        .sum();

    println!(
        "Simulating {} frames at {} Hz across {} emitters (capacity {})",
        frames,
        args.hz,
        arrangement.emitters().len(),
        capacity
    );

    frame_loop.run_fixed(&mut arrangement, args.hz, frames, |clock, arrangement| {
        if clock.frame_count % report_every == 0 || clock.frame_count == frames {
            println!(
                "t={:>7.2}s  frame {:>6}  live particles: {}",
                clock.elapsed(),
                clock.frame_count,
                arrangement.live_particles()
            );
        }
        Ok(())
    })?;

    println!("Dropped spawns: {}", arrangement.dropped_spawns());
    frame_loop.finish(&mut arrangement)?;

    Ok(())
}

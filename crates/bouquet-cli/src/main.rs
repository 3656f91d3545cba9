//! Bouquet CLI - Command-line interface for the voxel bouquet

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{build, frame, init, simulate};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bouquet")]
#[command(about = "Procedural voxel flower bouquet", long_about = None)]
#[command(version)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default arrangement config
    Init {
        /// Config file to create
        #[arg(default_value = "bouquet.toml")]
        path: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Generate the arrangement and describe its layout
    Build {
        /// Path to config file (defaults to ./bouquet.toml when present)
        #[arg(short, long)]
        config: Option<String>,

        /// Override the config seed
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(long, value_enum, default_value_t = build::BuildFormat::Text)]
        format: build::BuildFormat,
    },

    /// Step the arrangement at a fixed rate and report particle counts
    Simulate {
        /// Path to config file (defaults to ./bouquet.toml when present)
        #[arg(short, long)]
        config: Option<String>,

        /// Override the config seed
        #[arg(long)]
        seed: Option<u64>,

        /// Simulated duration in seconds
        #[arg(long, default_value = "3")]
        seconds: f64,

        /// Steps per second
        #[arg(long, default_value = "60")]
        hz: f64,
    },

    /// Write one flattened frame of cuboids
    Frame {
        /// Path to config file (defaults to ./bouquet.toml when present)
        #[arg(short, long)]
        config: Option<String>,

        /// Override the config seed
        #[arg(long)]
        seed: Option<u64>,

        /// Scene time in seconds; particles are simulated up to it
        #[arg(short, long, default_value = "0")]
        time: f64,

        /// Simulation rate used to reach `time`
        #[arg(long, default_value = "60")]
        hz: f64,

        /// Output format
        #[arg(long, value_enum, default_value_t = frame::FrameFormat::Json)]
        format: frame::FrameFormat,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Camera orbit distance
        #[arg(long)]
        distance: Option<f32>,

        /// Camera horizontal angle in degrees
        #[arg(long)]
        azimuth: Option<f32>,

        /// Camera angle from straight overhead in degrees
        #[arg(long)]
        polar: Option<f32>,

        /// Viewport aspect ratio (width / height)
        #[arg(long)]
        aspect: Option<f32>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Init { path, force } => init::run(&path, force),
        Commands::Build {
            config,
            seed,
            format,
        } => build::run(config.as_deref(), seed, format),
        Commands::Simulate {
            config,
            seed,
            seconds,
            hz,
        } => simulate::run(simulate::SimulateArgs {
            config,
            seed,
            seconds,
            hz,
        }),
        Commands::Frame {
            config,
            seed,
            time,
            hz,
            format,
            output,
            distance,
            azimuth,
            polar,
            aspect,
        } => frame::run(frame::FrameArgs {
            config,
            seed,
            time,
            hz,
            format,
            output,
            distance,
            azimuth,
            polar,
            aspect,
        }),
    }
}

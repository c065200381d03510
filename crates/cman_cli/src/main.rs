//! Cameraman CLI
//!
//! Load a profile, run it through the tick loop and print the camera poses.

use anyhow::{Context, Result};
use clap::Parser;
use cman_core::{load_profile, LaunchOptions, SequenceController, TickOutput};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default number of ticks to simulate (ten seconds at 35 ticks per second)
const DEFAULT_TICKS: u32 = 350;

#[derive(Parser)]
#[command(name = "cman")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Evaluate a Cameraman profile tick by tick", long_about = None)]
struct Cli {
    /// Cameraman profile (`.cman` is appended if the path has no extension)
    profile: PathBuf,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = DEFAULT_TICKS)]
    ticks: u32,

    /// First tick to print (earlier ticks still run)
    #[arg(short, long)]
    start: Option<i64>,

    /// Start printing where the camera engages
    #[arg(long)]
    auto_skip: bool,

    /// Stop once the camera path completes
    #[arg(long)]
    auto_exit: bool,

    /// Shorthand for --auto-skip --auto-exit
    #[arg(long)]
    viddump: bool,

    /// Print JSON lines instead of a table
    #[arg(long)]
    json: bool,

    /// Print poses in the host's fixed-point units
    #[arg(long)]
    fixed: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn launch_options(&self) -> LaunchOptions {
        if self.viddump {
            LaunchOptions::viddump()
        } else {
            LaunchOptions {
                auto_skip: self.auto_skip,
                auto_exit: self.auto_exit,
            }
        }
    }
}

#[derive(Serialize)]
struct TickLine<'a> {
    tick: i64,
    #[serde(flatten)]
    output: &'a TickOutput,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let params = load_profile(&cli.profile)
        .with_context(|| format!("Failed to load profile {}", cli.profile.display()))?;
    let options = cli.launch_options();

    let mut controller =
        SequenceController::new(params).context("Profile cannot drive the camera")?;

    let skip = options.skip_tics(controller.params());
    let first_printed = cli
        .start
        .or_else(|| skip.map(i64::from))
        .unwrap_or(0);
    let end = first_printed + i64::from(cli.ticks);

    if !controller.params().is_enabled() {
        warn!("Profile is disabled (delay < 0), the camera will never engage");
    }
    info!(
        "Simulating ticks {}..{} ({:?}, {:?}, {:?})",
        first_printed,
        end,
        controller.params().path_mode,
        controller.params().speed_mode,
        controller.params().angle_mode
    );

    // Ticks before the first printed one still run: the smoother and
    // tangent tracker depend on the full history
    for tick in 0..end {
        let output = controller.advance(tick);
        let skipping = tick < first_printed;

        if !skipping && output.engaged {
            print_tick(tick, &output, &cli)?;
        }

        if options.should_exit(&output, skipping) {
            info!("Camera path completed at tick {}", tick);
            break;
        }
    }

    Ok(())
}

fn print_tick(tick: i64, output: &TickOutput, cli: &Cli) -> Result<()> {
    if cli.json {
        let line = serde_json::to_string(&TickLine { tick, output })
            .context("Failed to serialize tick output")?;
        println!("{}", line);
        return Ok(());
    }

    let marker = if output.finished {
        " done"
    } else if output.reset_interpolation {
        " jump"
    } else {
        ""
    };

    if cli.fixed {
        let fixed = output.pose.to_fixed();
        println!(
            "{:>6}  x={:>11} y={:>11} z={:>11} angle={:>10} pitch={:>10}{}",
            tick, fixed.x, fixed.y, fixed.z, fixed.angle, fixed.pitch, marker
        );
    } else {
        let pose = &output.pose;
        println!(
            "{:>6}  {:>6.3}  x={:>10.3} y={:>10.3} z={:>9.3} yaw={:>8.5} pitch={:>8.5}{}",
            tick, output.progress, pose.x, pose.y, pose.z, pose.yaw, pose.pitch, marker
        );
    }

    Ok(())
}

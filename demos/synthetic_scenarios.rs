//! Run the navigation pipeline over synthetic depth scenes.
//!
//! Prints the strategic plan and reactive command for each scene, plus a
//! picture of the reactive hazard grid.
//!
//! Usage:
//!   cargo run --example synthetic_scenarios
//!   cargo run --example synthetic_scenarios -- --scene corridor --noise 0.05 --frames 3
//!   RUST_LOG=debug cargo run --example synthetic_scenarios -- --parallel

use clap::Parser;
use std::path::Path;

use drishti::core::{HazardState, ZoneGrid};
use drishti::source::{DepthEstimator, Scene, SyntheticDepth};
use drishti::{DrishtiConfig, NavigationOutput};

/// Synthetic scenario runner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "configs/drishti.yaml")]
    config: String,

    /// Scene name (all scenes when omitted)
    #[arg(short, long)]
    scene: Option<String>,

    /// Frames per scene
    #[arg(short, long, default_value_t = 1)]
    frames: u64,

    /// Additive depth noise amplitude
    #[arg(long, default_value_t = 0.0)]
    noise: f32,

    /// Fraction of invalid pixels
    #[arg(long, default_value_t = 0.0)]
    dropout: f32,

    /// Run strategic and reactive branches on separate threads
    #[arg(long)]
    parallel: bool,

    /// Print each output as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config_path = Path::new(&args.config);
    let config = if config_path.exists() {
        DrishtiConfig::load(config_path).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config: {}, using defaults", e);
            DrishtiConfig::default()
        })
    } else {
        println!("Config not found, using defaults");
        DrishtiConfig::default()
    };

    let pipeline = match config.build_pipeline() {
        Ok(pipeline) => pipeline,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let scenes: Vec<Scene> = match &args.scene {
        Some(name) => match Scene::ALL.iter().find(|s| s.name() == name.as_str()) {
            Some(scene) => vec![*scene],
            None => {
                let names: Vec<&str> = Scene::ALL.iter().map(|s| s.name()).collect();
                eprintln!("Unknown scene '{}'. Available: {}", name, names.join(", "));
                std::process::exit(1);
            }
        },
        None => Scene::ALL.to_vec(),
    };

    for scene in scenes {
        let mut source = SyntheticDepth::new(scene)
            .with_noise(args.noise)
            .with_dropout(args.dropout)
            .with_seed(42);

        for frame in 0..args.frames {
            let depth = match source.estimate(&frame) {
                Ok(depth) => depth,
                Err(e) => {
                    eprintln!("{}: frame {} skipped: {}", scene.name(), frame, e);
                    continue;
                }
            };
            let out = if args.parallel {
                pipeline.process_parallel(&depth)
            } else {
                pipeline.process(&depth)
            };

            if args.json {
                match serde_json::to_string(&out) {
                    Ok(json) => println!("{}", json),
                    Err(e) => eprintln!("JSON encoding failed: {}", e),
                }
            } else {
                print_summary(scene, frame, &out);
            }
        }
    }
}

fn print_summary(scene: Scene, frame: u64, out: &NavigationOutput) {
    println!("=== {} (frame {}) ===", scene.name(), frame);
    println!(
        "  strategic: yaw {:+.3} rad ({:+.1} deg), confidence {:.3}, ahead {:.2}",
        out.plan.target_yaw_delta,
        out.plan.target_yaw_delta.to_degrees(),
        out.plan.confidence,
        out.plan.min_distance_ahead
    );
    println!(
        "  reactive:  yaw {:+.2} rad, speed x{:.1}{}",
        out.command.yaw_delta,
        out.command.forward_scale,
        if out.command.emergency_brake { ", BRAKE" } else { "" }
    );
    if let Some(grid) = &out.reactive_grid {
        print_grid(grid);
    }
}

fn print_grid(grid: &ZoneGrid) {
    for row in 0..grid.grid_h() {
        let line: String = grid
            .row(row)
            .iter()
            .map(|c| match c.state {
                HazardState::Free => '.',
                HazardState::Warning => 'w',
                HazardState::Emergency => 'E',
            })
            .collect();
        println!("    {}", line);
    }
}

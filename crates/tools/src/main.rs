mod config;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use features::{CircleFeature, FeatureStore, GeoJsonFeature, MemoryStore};
use foundation::math::{LngLat, great_circle_distance_m};
use modes::{Context, DrawCircleMode, RecordingHost, StopOutcome, parse_script, replay};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "circle-draw", about = "Circle drawing engine utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the GeoJSON circle for a center and radius.
    Ring {
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Radius in meters.
        radius: f64,
    },
    /// Great-circle distance in meters between two lng/lat points.
    Distance {
        #[arg(allow_negative_numbers = true)]
        lng1: f64,
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lng2: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
    },
    /// Run a JSON input script through the circle drawing mode.
    Replay {
        script: PathBuf,
        /// Stop the mode at the end of the script even if it has not finished.
        #[arg(long)]
        finish: bool,
        /// Write the created feature here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Rebuild a circle from its GeoJSON (regenerates the ring).
    Rebuild { input: PathBuf },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Command::Ring { lng, lat, radius } => cmd_ring(&config, LngLat::new(lng, lat), radius),
        Command::Distance {
            lng1,
            lat1,
            lng2,
            lat2,
        } => {
            println!("{}", great_circle_distance_m(lat1, lng1, lat2, lng2));
            Ok(())
        }
        Command::Replay {
            script,
            finish,
            out,
        } => cmd_replay(&config, &script, finish, out.as_deref()),
        Command::Rebuild { input } => cmd_rebuild(&input),
    }
}

fn cmd_ring(config: &Config, center: LngLat, radius: f64) -> Result<(), String> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(format!("radius must be a non-negative number, got {radius}"));
    }
    let mut store = MemoryStore::new();
    let mut circle = CircleFeature::with_steps(store.new_id(), config.draw.steps);
    circle.place(center, radius);
    print_feature(&circle.to_geojson(), None)
}

fn cmd_replay(
    config: &Config,
    script: &Path,
    finish: bool,
    out: Option<&Path>,
) -> Result<(), String> {
    let payload = fs::read_to_string(script).map_err(|e| format!("read {script:?}: {e}"))?;
    let events = parse_script(&payload).map_err(|e| e.to_string())?;

    let mut store = MemoryStore::new();
    let mut host = RecordingHost::new();
    let mut mode = DrawCircleMode::with_options(&mut store, config.draw);
    let report = replay(
        &mut mode,
        &mut Context::new(&mut store, &mut host),
        &events,
        finish,
    );
    info!(
        processed = report.processed,
        total = events.len(),
        host_calls = host.events().len(),
        "replay finished"
    );

    match report.outcome {
        Some(StopOutcome::Created(feature)) => print_feature(&feature, out),
        Some(StopOutcome::Discarded(reason)) => {
            eprintln!("circle discarded ({reason:?})");
            Ok(())
        }
        Some(StopOutcome::Missing) => {
            eprintln!("circle was removed before the mode stopped");
            Ok(())
        }
        None => {
            eprintln!(
                "mode still active after {} events (state {:?}); pass --finish to stop it",
                report.processed,
                mode.state()
            );
            Ok(())
        }
    }
}

fn cmd_rebuild(input: &Path) -> Result<(), String> {
    let payload = fs::read_to_string(input).map_err(|e| format!("read {input:?}: {e}"))?;
    let geojson: GeoJsonFeature =
        serde_json::from_str(&payload).map_err(|e| format!("parse {input:?}: {e}"))?;
    let mut store = MemoryStore::new();
    let id = geojson.id.unwrap_or_else(|| store.new_id());
    let circle = CircleFeature::from_geojson(&geojson, id).map_err(|e| e.to_string())?;
    print_feature(&circle.to_geojson(), None)
}

fn print_feature(feature: &GeoJsonFeature, out: Option<&Path>) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(feature).map_err(|e| format!("json: {e}"))?;
    match out {
        Some(path) => {
            fs::write(path, payload).map_err(|e| format!("write {path:?}: {e}"))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{payload}"),
    }
    Ok(())
}

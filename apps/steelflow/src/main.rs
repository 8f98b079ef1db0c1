//! steelflow: synthetic steel-logistics data, plant stock to vessel delay.
//!
//! ```text
//! steelflow run                         # every stage in order
//! steelflow stage ports                 # one stage, inputs from --output-dir
//! steelflow predict-trains --weights w.json
//! steelflow predict-vessels              # port fallbacks without --weights
//! ```
//!
//! Configuration comes from `steelflow.toml` (or `--config`); flags override
//! the file.  `RUST_LOG` overrides the log level chosen by `-v`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sf_pipeline::{PipelineBuilder, PipelineConfig, Stage, TracingObserver};

const DEFAULT_CONFIG: &str = "steelflow.toml";

// ── CLI arguments ─────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "steelflow", version, about = "Synthetic steel-logistics pipeline")]
struct Args {
    /// Configuration file (defaults to ./steelflow.toml when present)
    #[arg(short, long, env = "STEELFLOW_CONFIG")]
    config: Option<PathBuf>,

    /// Master seed; overrides `seed` in the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory; overrides `output_dir` in the config file
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run every stage in order
    Run,
    /// Run one stage: plants, trains, ports, tariffs, contracts, vessels
    Stage {
        #[arg(value_parser = parse_stage)]
        stage: Stage,
    },
    /// Score the train log and write train_predictions.csv
    PredictTrains {
        /// Linear model weights (JSON); fallbacks are used without one
        #[arg(long)]
        weights: Option<PathBuf>,
    },
    /// Score the vessel delay history and write vessel_predictions.csv
    PredictVessels {
        /// Linear model weights (JSON); fallbacks are used without one
        #[arg(long)]
        weights: Option<PathBuf>,
    },
}

fn parse_stage(s: &str) -> Result<Stage, String> {
    s.parse().map_err(|e: sf_pipeline::PipelineError| e.to_string())
}

// ── Configuration ─────────────────────────────────────────────────────────────

/// An explicit config path must exist.  The default path is optional, and a
/// file that fails to parse falls back to defaults with a warning.
fn load_config(explicit: Option<&Path>) -> Result<PipelineConfig> {
    let path = explicit.unwrap_or(Path::new(DEFAULT_CONFIG));
    if explicit.is_none() && !path.exists() {
        tracing::info!("no {DEFAULT_CONFIG} found; using built-in defaults");
        return Ok(PipelineConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config {}", path.display()))?;
    match PipelineConfig::from_toml_str(&text, path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "configuration loaded");
            Ok(config)
        }
        Err(e) => {
            tracing::warn!(error = %e, "invalid configuration; using built-in defaults");
            Ok(PipelineConfig::default())
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_target(false)
        .init();

    let config = load_config(args.config.as_deref())?;
    let mut builder = PipelineBuilder::new(config);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    if let Some(dir) = args.output_dir {
        builder = builder.output_dir(dir);
    }
    let mut pipeline = builder.build().context("cannot set up pipeline")?;
    let mut observer = TracingObserver::default();

    match args.command {
        Command::Run => {
            let reports = pipeline.run(&mut observer)?;
            for r in &reports {
                println!("{:<10} {:>8} rows  {}", r.stage, r.rows, r.path.display());
            }
        }
        Command::Stage { stage } => {
            let report = pipeline
                .run_stage(stage, &mut observer)
                .with_context(|| format!("stage {stage} failed"))?;
            pipeline.finish()?;
            println!("{:<10} {:>8} rows  {}", report.stage, report.rows, report.path.display());
        }
        Command::PredictTrains { weights } => {
            let (rows, path) = pipeline.predict_trains(weights.as_deref())?;
            println!("{} trips scored  {}", rows.len(), path.display());
        }
        Command::PredictVessels { weights } => {
            let (rows, path) = pipeline.predict_vessels(weights.as_deref())?;
            println!("{} vessel calls scored  {}", rows.len(), path.display());
        }
    }
    Ok(())
}

//! Surface metrics for NIfTI segmentations.
//!
//! # Commands
//!
//! - `surface-metrics evaluate --gt-dir <DIR> --pred-dir <DIR>` - Score every
//!   paired case of two directories and print the batch summary
//! - `surface-metrics compare <GT> <PRED>` - Score a single pair of files
//!
//! Parameters come from defaults (or `--reference`), then an optional JSON
//! `--config` file, then individual flags, each layer overriding the last.
//! Logging goes to stderr and honours `RUST_LOG`.

mod report;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use surface_eval::{CasePair, EvalParams, evaluate_directories, evaluate_pair};
use surface_types::Spacing;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Surface distance metrics for segmentation masks
#[derive(Parser)]
#[command(name = "surface-metrics")]
#[command(about = "Surface distance metrics for NIfTI segmentations", long_about = None)]
#[command(version)]
struct Cli {
    /// Log debug output (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every case paired from two directories
    Evaluate {
        /// Directory of ground-truth masks
        #[arg(long)]
        gt_dir: PathBuf,

        /// Directory of predicted masks
        #[arg(long)]
        pred_dir: PathBuf,

        #[command(flatten)]
        options: EvalOptions,

        /// Write the full report as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Score a single ground-truth / prediction pair
    Compare {
        /// Ground-truth mask
        #[arg(name = "GT")]
        gt: PathBuf,

        /// Predicted mask
        #[arg(name = "PRED")]
        pred: PathBuf,

        #[command(flatten)]
        options: EvalOptions,
    },
}

/// Evaluation parameter overrides.
#[derive(Args, Debug, Default)]
struct EvalOptions {
    /// Start from the 2x1x1 mm, channel-0 reference protocol
    #[arg(long)]
    reference: bool,

    /// JSON file with evaluation parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Voxel spacing override in mm, e.g. "2,1,1"
    #[arg(long, value_parser = parse_spacing)]
    spacing: Option<Spacing>,

    /// Surface tolerance in mm
    #[arg(long)]
    tolerance: Option<f64>,

    /// Percentile for the robust Hausdorff distance
    #[arg(long)]
    percent: Option<f64>,

    /// Restrict predictions to the ground truth before scoring
    #[arg(long)]
    overlap: bool,

    /// Channel to select from 4-D predictions
    #[arg(long)]
    channel: Option<usize>,

    /// File name suffix of ground-truth masks
    #[arg(long)]
    gt_suffix: Option<String>,
}

fn parse_spacing(s: &str) -> Result<Spacing, String> {
    let values: Vec<f64> = s
        .split(',')
        .map(|part| part.trim().parse::<f64>().map_err(|e| format!("{part:?}: {e}")))
        .collect::<Result<_, _>>()?;
    let [x0, x1, x2] = values[..] else {
        return Err(format!("expected three comma-separated values, got {}", values.len()));
    };
    Spacing::new(x0, x1, x2).map_err(|e| e.to_string())
}

impl EvalOptions {
    /// Layers defaults, the config file and flags into one parameter set.
    fn resolve(&self) -> Result<EvalParams> {
        let mut params = match &self.config {
            Some(path) => load_config(path)?,
            None if self.reference => EvalParams::reference_protocol(),
            None => EvalParams::default(),
        };
        if self.reference && self.config.is_some() {
            let reference = EvalParams::reference_protocol();
            params.spacing_mm = params.spacing_mm.or(reference.spacing_mm);
            params.prediction_channel = params.prediction_channel.or(reference.prediction_channel);
        }

        if let Some(spacing) = self.spacing {
            params.spacing_mm = Some(spacing);
        }
        if let Some(tolerance) = self.tolerance {
            params.tolerance_mm = tolerance;
        }
        if let Some(percent) = self.percent {
            params.robust_percent = percent;
        }
        if self.overlap {
            params.apply_overlap = true;
        }
        if let Some(channel) = self.channel {
            params.prediction_channel = Some(channel);
        }
        if let Some(suffix) = &self.gt_suffix {
            params.gt_suffix.clone_from(suffix);
        }
        Ok(params)
    }
}

fn load_config(path: &Path) -> Result<EvalParams> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Evaluate {
            gt_dir,
            pred_dir,
            options,
            json,
        } => {
            let params = options.resolve()?;
            info!(?params, "evaluating directories");
            let batch = evaluate_directories(&gt_dir, &pred_dir, &params)
                .context("failed to pair cases")?;

            for case in &batch.cases {
                report::print_case(case);
            }
            report::print_batch(&batch);

            if let Some(path) = json {
                let text = serde_json::to_string_pretty(&batch)?;
                fs::write(&path, text)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!(path = %path.display(), "wrote JSON report");
            }
            Ok(())
        }
        Commands::Compare { gt, pred, options } => {
            let params = options.resolve()?;
            let pair = CasePair { gt, pred };
            let case = evaluate_pair(&pair, &params).context("failed to evaluate case")?;
            report::print_case(&case);
            Ok(())
        }
    }
}

//! Batch evaluation of segmentation masks stored as NIfTI images.
//!
//! Pairs ground-truth and prediction files from two directories, scores
//! each pair with the surface metrics of [`surface_distance`] plus
//! volumetric Dice, and aggregates the results.
//!
//! # Layers
//!
//! - [`load_mask`] / [`write_mask`] - NIfTI I/O, gzip detected automatically
//! - [`pair_cases`] - Sorted, suffix-filtered file pairing
//! - [`evaluate_case`] - All metrics for one pair of in-memory masks
//! - [`evaluate_pair`] - Load, resolve spacing, score, count voxel outcomes
//! - [`BatchReport`] / [`BatchSummary`] - Per-case results and their averages
//! - [`ConfusionMatrix`] / [`RocCurve`] - Voxel-wise classification metrics
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use surface_eval::{EvalParams, evaluate_directories};
//!
//! let params = EvalParams::reference_protocol().apply_overlap(true);
//! let report = evaluate_directories(Path::new("data/gt"), Path::new("data/pred"), &params)?;
//!
//! println!("mean surface dice: {:.4}", report.summary.surface_dice.mean());
//! println!("AUC: {:.4}", report.confusion.roc_curve().auc());
//! # Ok::<(), surface_eval::EvalError>(())
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod batch;
mod case;
mod classification;
mod error;
mod io;
mod pairing;
mod params;

pub use batch::{BatchReport, BatchSummary, MeanAccumulator, SkippedCase, evaluate_directories};
pub use case::{CaseMetrics, CaseReport, evaluate_case, evaluate_pair};
pub use classification::{ConfusionMatrix, RocCurve};
pub use error::{EvalError, EvalResult};
pub use io::{MaskImage, load_mask, write_mask};
pub use pairing::{CasePair, pair_cases};
pub use params::EvalParams;

//! Directory-level evaluation and aggregation.

use std::path::Path;

use tracing::{info, warn};

use crate::case::{CaseMetrics, CaseReport, evaluate_pair};
use crate::classification::ConfusionMatrix;
use crate::error::EvalResult;
use crate::pairing::{CasePair, pair_cases};
use crate::params::EvalParams;

/// Running mean over the values that pass a filter.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    /// Adds `value`.
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Number of values added.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Mean of the values added, NaN if there are none.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.sum / self.count as f64
        }
    }
}

/// Averages of per-case metrics over a batch.
///
/// Dice scores are averaged over the cases where they are defined (not
/// NaN); Hausdorff distances over the cases where they are finite. Each
/// accumulator keeps its own case count.
///
/// # Example
///
/// ```
/// use surface_eval::{BatchSummary, CaseMetrics};
///
/// let case = |dice: f64, hd: f64| CaseMetrics {
///     average_distance_gt_to_pred: 0.0,
///     average_distance_pred_to_gt: 0.0,
///     hausdorff_100: hd,
///     hausdorff_robust: hd,
///     surface_overlap_gt: 1.0,
///     surface_overlap_pred: 1.0,
///     surface_dice: dice,
///     volumetric_dice: dice,
///     surfels_gt: 1,
///     surfels_pred: 1,
/// };
///
/// let summary: BatchSummary = [case(0.8, 2.0), case(f64::NAN, f64::INFINITY), case(0.6, 4.0)]
///     .iter()
///     .collect();
///
/// assert!((summary.volumetric_dice.mean() - 0.7).abs() < 1e-12);
/// assert_eq!(summary.hausdorff_100.count(), 2);
/// assert_eq!(summary.cases, 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchSummary {
    /// Number of cases added.
    pub cases: usize,
    /// Volumetric Dice over defined cases.
    pub volumetric_dice: MeanAccumulator,
    /// Surface Dice over defined cases.
    pub surface_dice: MeanAccumulator,
    /// Hausdorff 100 over finite cases.
    pub hausdorff_100: MeanAccumulator,
    /// Robust Hausdorff over finite cases.
    pub hausdorff_robust: MeanAccumulator,
}

impl BatchSummary {
    /// Adds one case.
    pub fn add(&mut self, metrics: &CaseMetrics) {
        self.cases += 1;
        if !metrics.volumetric_dice.is_nan() {
            self.volumetric_dice.push(metrics.volumetric_dice);
        }
        if !metrics.surface_dice.is_nan() {
            self.surface_dice.push(metrics.surface_dice);
        }
        if metrics.hausdorff_100.is_finite() {
            self.hausdorff_100.push(metrics.hausdorff_100);
        }
        if metrics.hausdorff_robust.is_finite() {
            self.hausdorff_robust.push(metrics.hausdorff_robust);
        }
    }
}

impl<'a> FromIterator<&'a CaseMetrics> for BatchSummary {
    fn from_iter<I: IntoIterator<Item = &'a CaseMetrics>>(iter: I) -> Self {
        let mut summary = Self::default();
        for metrics in iter {
            summary.add(metrics);
        }
        summary
    }
}

/// A case that could not be scored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkippedCase {
    /// Files of the case.
    pub pair: CasePair,
    /// Why it was skipped.
    pub reason: String,
}

/// Results of evaluating a directory pair.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchReport {
    /// Scored cases, in pairing order.
    pub cases: Vec<CaseReport>,
    /// Cases that failed to load or score.
    pub skipped: Vec<SkippedCase>,
    /// Averages over the scored cases.
    pub summary: BatchSummary,
    /// Voxel outcomes pooled over the scored cases.
    pub confusion: ConfusionMatrix,
}

impl BatchReport {
    /// Scores every pair, skipping the ones that fail.
    #[must_use]
    pub fn evaluate(pairs: &[CasePair], params: &EvalParams) -> Self {
        let mut report = Self::default();
        for pair in pairs {
            match evaluate_pair(pair, params) {
                Ok(case) => report.push(case),
                Err(e) => {
                    warn!(gt = %pair.gt.display(), pred = %pair.pred.display(), error = %e, "skipping case");
                    report.skipped.push(SkippedCase {
                        pair: pair.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        info!(
            cases = report.cases.len(),
            skipped = report.skipped.len(),
            "batch evaluated"
        );
        report
    }

    /// Adds a scored case.
    pub fn push(&mut self, case: CaseReport) {
        self.summary.add(&case.metrics);
        self.confusion = self.confusion.merged(case.confusion);
        self.cases.push(case);
    }
}

/// Pairs the files of two directories and scores every pair.
///
/// # Errors
///
/// Returns an error only if a directory cannot be listed; individual cases
/// that fail are reported in [`BatchReport::skipped`].
pub fn evaluate_directories(
    gt_dir: &Path,
    pred_dir: &Path,
    params: &EvalParams,
) -> EvalResult<BatchReport> {
    let pairs = pair_cases(gt_dir, pred_dir, &params.gt_suffix)?;
    info!(
        gt_dir = %gt_dir.display(),
        pred_dir = %pred_dir.display(),
        pairs = pairs.len(),
        "paired cases"
    );
    Ok(BatchReport::evaluate(&pairs, params))
}

//! Scoring a single ground-truth / prediction pair.

use std::borrow::Cow;

use surface_distance::{
    compute_average_surface_distance, compute_dice_coefficient, compute_robust_hausdorff,
    compute_surface_dice_at_tolerance, compute_surface_distances,
    compute_surface_overlap_at_tolerance,
};
use surface_types::{Spacing, Volume};
use tracing::{debug, info, warn};

use crate::classification::ConfusionMatrix;
use crate::error::EvalResult;
use crate::io::load_mask;
use crate::pairing::CasePair;
use crate::params::EvalParams;

/// Every metric computed for one case.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaseMetrics {
    /// Mean distance from ground truth to prediction, mm.
    pub average_distance_gt_to_pred: f64,
    /// Mean distance from prediction to ground truth, mm.
    pub average_distance_pred_to_gt: f64,
    /// Hausdorff distance (100th percentile), mm.
    pub hausdorff_100: f64,
    /// Hausdorff distance at the configured percentile, mm.
    pub hausdorff_robust: f64,
    /// Share of the ground-truth surface within tolerance.
    pub surface_overlap_gt: f64,
    /// Share of the predicted surface within tolerance.
    pub surface_overlap_pred: f64,
    /// Surface Dice at the configured tolerance.
    pub surface_dice: f64,
    /// Volumetric Dice.
    pub volumetric_dice: f64,
    /// Number of ground-truth surfels.
    pub surfels_gt: usize,
    /// Number of predicted surfels.
    pub surfels_pred: usize,
}

/// Scores a prediction against a ground truth.
///
/// With `params.apply_overlap` the prediction is first restricted to the
/// ground truth. `params.spacing_mm` is ignored here; `spacing` is used as
/// given.
///
/// # Errors
///
/// Returns an error if the masks differ in shape.
///
/// # Example
///
/// ```
/// use surface_eval::{EvalParams, evaluate_case};
/// use surface_types::{Spacing, Volume};
///
/// let gt = Volume::from_fn([6, 6, 6], |[i, j, k]| {
///     (1..5).contains(&i) && (1..5).contains(&j) && (1..5).contains(&k)
/// })
/// .unwrap();
///
/// let metrics = evaluate_case(&gt, &gt, &Spacing::unit(), &EvalParams::default()).unwrap();
/// assert_eq!(metrics.hausdorff_100, 0.0);
/// assert_eq!(metrics.volumetric_dice, 1.0);
/// ```
pub fn evaluate_case(
    mask_gt: &Volume<bool>,
    mask_pred: &Volume<bool>,
    spacing: &Spacing,
    params: &EvalParams,
) -> EvalResult<CaseMetrics> {
    let mask_pred = scored_prediction(mask_gt, mask_pred, params)?;
    score(mask_gt, &mask_pred, spacing, params)
}

/// The prediction as it is scored: restricted to the ground truth when
/// `params.apply_overlap` is set.
fn scored_prediction<'a>(
    mask_gt: &Volume<bool>,
    mask_pred: &'a Volume<bool>,
    params: &EvalParams,
) -> EvalResult<Cow<'a, Volume<bool>>> {
    if params.apply_overlap {
        Ok(Cow::Owned(mask_pred.intersection(mask_gt)?))
    } else {
        Ok(Cow::Borrowed(mask_pred))
    }
}

fn score(
    mask_gt: &Volume<bool>,
    mask_pred: &Volume<bool>,
    spacing: &Spacing,
    params: &EvalParams,
) -> EvalResult<CaseMetrics> {
    let distances = compute_surface_distances(mask_gt, mask_pred, spacing)?;
    let (average_distance_gt_to_pred, average_distance_pred_to_gt) =
        compute_average_surface_distance(&distances);
    let (surface_overlap_gt, surface_overlap_pred) =
        compute_surface_overlap_at_tolerance(&distances, params.tolerance_mm);

    Ok(CaseMetrics {
        average_distance_gt_to_pred,
        average_distance_pred_to_gt,
        hausdorff_100: compute_robust_hausdorff(&distances, 100.0),
        hausdorff_robust: compute_robust_hausdorff(&distances, params.robust_percent),
        surface_overlap_gt,
        surface_overlap_pred,
        surface_dice: compute_surface_dice_at_tolerance(&distances, params.tolerance_mm),
        volumetric_dice: compute_dice_coefficient(mask_gt, mask_pred)?,
        surfels_gt: distances.len_gt(),
        surfels_pred: distances.len_pred(),
    })
}

/// Result of scoring one pair of files.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaseReport {
    /// Case name derived from the ground-truth file.
    pub name: String,
    /// Files that were compared.
    pub pair: CasePair,
    /// Spacing the metrics were computed with.
    pub spacing: Spacing,
    /// Surface and volumetric metrics.
    pub metrics: CaseMetrics,
    /// Voxel outcome counts of the scored masks.
    pub confusion: ConfusionMatrix,
}

/// Loads a pair of NIfTI masks and scores them.
///
/// The prediction channel and spacing are resolved from `params`; without a
/// spacing override the ground-truth header spacing is used, and a
/// prediction header that disagrees with it is logged. Overlap
/// post-processing also applies to the confusion counts.
///
/// # Errors
///
/// Returns an error if either file cannot be loaded, the masks differ in
/// shape, or no spacing override is set and the ground-truth header
/// spacing is invalid.
pub fn evaluate_pair(pair: &CasePair, params: &EvalParams) -> EvalResult<CaseReport> {
    let gt = load_mask(&pair.gt, None)?;
    let pred = load_mask(&pair.pred, params.prediction_channel)?;
    let name = pair.name(&params.gt_suffix);
    debug!(
        case = %name,
        gt_dims = ?gt.mask.dims(),
        pred_dims = ?pred.mask.dims(),
        "loaded case"
    );

    if params.spacing_mm.is_none() {
        if let (Ok(gt_spacing), Ok(pred_spacing)) = (&gt.spacing, &pred.spacing) {
            if gt_spacing != pred_spacing {
                warn!(
                    case = %name,
                    gt_spacing = ?gt_spacing.as_array(),
                    pred_spacing = ?pred_spacing.as_array(),
                    "header spacings differ, using the ground truth's"
                );
            }
        }
    }
    let spacing = params.resolve_spacing(&pair.gt, gt.spacing)?;

    let pred_mask = scored_prediction(&gt.mask, &pred.mask, params)?;
    let metrics = score(&gt.mask, &pred_mask, &spacing, params)?;
    let confusion = ConfusionMatrix::from_masks(&gt.mask, &pred_mask)?;

    info!(
        case = %name,
        surface_dice = metrics.surface_dice,
        volumetric_dice = metrics.volumetric_dice,
        hausdorff_100 = metrics.hausdorff_100,
        "evaluated case"
    );
    Ok(CaseReport {
        name,
        pair: pair.clone(),
        spacing,
        metrics,
        confusion,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::EvalError;
    use crate::io::write_mask;
    use approx::assert_relative_eq;
    use tempfile::tempdir;

    fn block(dims: [usize; 3], lo: [usize; 3], hi: [usize; 3]) -> Volume<bool> {
        Volume::from_fn(dims, |c| (0..3).all(|a| c[a] >= lo[a] && c[a] < hi[a])).unwrap()
    }

    #[test]
    fn test_dilated_cube_metrics() {
        let gt = block([12, 10, 10], [1, 0, 0], [11, 10, 10]);
        let pred = block([12, 10, 10], [0, 0, 0], [12, 10, 10]);
        let spacing = Spacing::new(2.0, 1.0, 1.0).unwrap();

        let m = evaluate_case(&gt, &pred, &spacing, &EvalParams::default()).unwrap();
        assert_relative_eq!(m.average_distance_gt_to_pred, 0.275_304_118_670_990_36, epsilon = 1e-9);
        assert_relative_eq!(m.average_distance_pred_to_gt, 0.446_472_900_526_897_7, epsilon = 1e-9);
        assert_eq!(m.hausdorff_100, 2.0);
        assert_eq!(m.hausdorff_robust, 2.0);
        assert_relative_eq!(m.surface_dice, 0.831_958_936_812_994_9, epsilon = 1e-9);
        assert_relative_eq!(m.volumetric_dice, 2000.0 / 2200.0);
        assert_eq!((m.surfels_gt, m.surfels_pred), (602, 682));
    }

    #[test]
    fn test_overlap_restricts_prediction() {
        let gt = block([12, 10, 10], [1, 0, 0], [11, 10, 10]);
        let pred = block([12, 10, 10], [0, 0, 0], [12, 10, 10]);
        let params = EvalParams::default().apply_overlap(true);

        let m = evaluate_case(&gt, &pred, &Spacing::unit(), &params).unwrap();
        assert_eq!(m.volumetric_dice, 1.0);
        assert_eq!(m.hausdorff_100, 0.0);
        assert_eq!(m.surface_dice, 1.0);
    }

    #[test]
    fn test_empty_prediction() {
        let gt = block([5, 5, 5], [1, 1, 1], [3, 3, 3]);
        let pred = Volume::filled([5, 5, 5], false).unwrap();
        let m = evaluate_case(&gt, &pred, &Spacing::unit(), &EvalParams::default()).unwrap();
        assert_eq!(m.hausdorff_100, f64::INFINITY);
        assert_eq!(m.surface_dice, 0.0);
        assert_eq!(m.volumetric_dice, 0.0);
        assert!(m.average_distance_pred_to_gt.is_nan());
        assert_eq!(m.surfels_pred, 0);
    }

    #[test]
    fn test_shape_mismatch_is_error() {
        let gt = Volume::filled([4, 4, 4], true).unwrap();
        let pred = Volume::filled([4, 4, 3], true).unwrap();
        assert!(evaluate_case(&gt, &pred, &Spacing::unit(), &EvalParams::default()).is_err());
        let params = EvalParams::default().apply_overlap(true);
        assert!(evaluate_case(&gt, &pred, &Spacing::unit(), &params).is_err());
    }

    #[test]
    fn test_evaluate_pair_uses_header_spacing() {
        let dir = tempdir().unwrap();
        let gt_path = dir.path().join("case_seg.nii.gz");
        let pred_path = dir.path().join("case_pred.nii.gz");
        let gt = block([4, 4, 6], [1, 1, 1], [2, 2, 2]);
        let pred = block([4, 4, 6], [1, 1, 4], [2, 2, 5]);
        let header = Spacing::new(1.0, 1.0, 2.0).unwrap();
        write_mask(&gt_path, &gt, &header).unwrap();
        write_mask(&pred_path, &pred, &header).unwrap();

        let pair = CasePair {
            gt: gt_path,
            pred: pred_path,
        };
        let report = evaluate_pair(&pair, &EvalParams::default()).unwrap();
        assert_eq!(report.name, "case");
        assert_eq!(report.spacing, header);
        assert_eq!(report.metrics.hausdorff_100, 6.0);
        assert_eq!(report.confusion.true_positives, 0);
        assert_eq!(report.confusion.false_negatives, 1);
        assert_eq!(report.confusion.false_positives, 1);

        let fixed = EvalParams::default().spacing(Spacing::unit());
        let report = evaluate_pair(&pair, &fixed).unwrap();
        assert_eq!(report.metrics.hausdorff_100, 3.0);
    }

    #[test]
    fn test_evaluate_pair_rejects_zero_header_spacing() {
        let dir = tempdir().unwrap();
        let gt_path = dir.path().join("case_seg.nii");
        let pred_path = dir.path().join("case.nii");
        let mask = block([4, 4, 4], [1, 1, 1], [3, 3, 3]);
        write_mask(&gt_path, &mask, &Spacing::unit()).unwrap();
        write_mask(&pred_path, &mask, &Spacing::unit()).unwrap();

        // Zero pixdim[1] in the uncompressed ground-truth header.
        let mut bytes = std::fs::read(&gt_path).unwrap();
        bytes[80..84].copy_from_slice(&0.0_f32.to_le_bytes());
        std::fs::write(&gt_path, bytes).unwrap();

        let pair = CasePair {
            gt: gt_path,
            pred: pred_path,
        };
        let err = evaluate_pair(&pair, &EvalParams::default()).unwrap_err();
        assert!(matches!(err, EvalError::HeaderSpacing { .. }), "{err}");

        let fixed = EvalParams::default().spacing(Spacing::unit());
        let report = evaluate_pair(&pair, &fixed).unwrap();
        assert_eq!(report.spacing, Spacing::unit());
        assert_eq!(report.metrics.volumetric_dice, 1.0);
    }

    #[test]
    fn test_evaluate_pair_prefers_gt_header_spacing() {
        let dir = tempdir().unwrap();
        let gt_path = dir.path().join("case_seg.nii.gz");
        let pred_path = dir.path().join("case.nii.gz");
        let gt = block([4, 4, 6], [1, 1, 1], [2, 2, 2]);
        let pred = block([4, 4, 6], [1, 1, 4], [2, 2, 5]);
        write_mask(&gt_path, &gt, &Spacing::new(1.0, 1.0, 2.0).unwrap()).unwrap();
        write_mask(&pred_path, &pred, &Spacing::unit()).unwrap();

        let pair = CasePair {
            gt: gt_path,
            pred: pred_path,
        };
        let report = evaluate_pair(&pair, &EvalParams::default()).unwrap();
        assert_eq!(report.spacing.as_array(), [1.0, 1.0, 2.0]);
        assert_eq!(report.metrics.hausdorff_100, 6.0);
    }

    #[test]
    fn test_overlap_shared_by_metrics_and_confusion() {
        let dir = tempdir().unwrap();
        let gt_path = dir.path().join("case_seg.nii.gz");
        let pred_path = dir.path().join("case.nii.gz");
        let gt = block([12, 10, 10], [1, 0, 0], [11, 10, 10]);
        let pred = block([12, 10, 10], [0, 0, 0], [12, 10, 10]);
        write_mask(&gt_path, &gt, &Spacing::unit()).unwrap();
        write_mask(&pred_path, &pred, &Spacing::unit()).unwrap();

        let pair = CasePair {
            gt: gt_path,
            pred: pred_path,
        };
        let params = EvalParams::default().apply_overlap(true);
        let report = evaluate_pair(&pair, &params).unwrap();
        let in_memory = evaluate_case(&gt, &pred, &Spacing::unit(), &params).unwrap();

        assert_eq!(report.metrics, in_memory);
        assert_eq!(report.confusion.false_positives, 0);
        assert_eq!(report.confusion.true_positives, 1000);
        assert_eq!(report.confusion.true_negatives, 200);
    }
}

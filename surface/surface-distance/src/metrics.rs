//! Area-weighted statistics over [`SurfaceDistances`].
//!
//! Every function here is total: an empty direction yields NaN for ratios
//! with zero total area and `+inf` for the Hausdorff distance.

use crate::distances::SurfaceDistances;

/// Area-weighted mean of distances. NaN when the total area is zero.
fn weighted_mean(distances: &[f64], areas: &[f64]) -> f64 {
    let total: f64 = areas.iter().sum();
    let weighted: f64 = distances.iter().zip(areas).map(|(d, a)| d * a).sum();
    weighted / total
}

/// Distance at which the cumulative area fraction first reaches `percent`.
///
/// `distances` must be sorted ascending. The search index is clamped to the
/// last surfel so that floating-point shortfall of the final cumulative
/// fraction still selects the largest distance. A NaN `percent` orders
/// after every fraction and also selects the largest distance.
fn percentile_distance(distances: &[f64], areas: &[f64], percent: f64) -> f64 {
    if distances.is_empty() {
        return f64::INFINITY;
    }
    let total: f64 = areas.iter().sum();
    let cumulative: Vec<f64> = areas
        .iter()
        .scan(0.0, |running, &area| {
            *running += area;
            Some(*running / total)
        })
        .collect();

    let target = percent / 100.0;
    let idx = if target.is_nan() {
        cumulative.len()
    } else {
        cumulative.partition_point(|&fraction| fraction < target)
    };
    distances[idx.min(distances.len() - 1)]
}

/// Area of the surfels within `tolerance_mm` of the other surface.
///
/// `distances` must be sorted ascending.
fn area_within(distances: &[f64], areas: &[f64], tolerance_mm: f64) -> f64 {
    let count = distances.partition_point(|&d| d <= tolerance_mm);
    areas[..count].iter().sum()
}

/// Average surface distance in mm, per direction.
///
/// Returns `(gt_to_pred, pred_to_gt)`: the surfel-area-weighted mean
/// distance from each surface to the other. A direction without surfels is
/// NaN; a direction whose opposing surface is absent is `+inf`.
///
/// # Example
///
/// ```
/// use surface_distance::{SurfaceDistances, compute_average_surface_distance};
///
/// let set = SurfaceDistances::from_unsorted(
///     vec![1.0, 3.0], vec![3.0, 1.0],
///     vec![], vec![],
/// ).unwrap();
///
/// let (gt_to_pred, pred_to_gt) = compute_average_surface_distance(&set);
/// assert_eq!(gt_to_pred, 1.5);
/// assert!(pred_to_gt.is_nan());
/// ```
#[must_use]
pub fn compute_average_surface_distance(surface_distances: &SurfaceDistances) -> (f64, f64) {
    (
        weighted_mean(
            surface_distances.distances_gt_to_pred(),
            surface_distances.surfel_areas_gt(),
        ),
        weighted_mean(
            surface_distances.distances_pred_to_gt(),
            surface_distances.surfel_areas_pred(),
        ),
    )
}

/// Robust (percentile) Hausdorff distance in mm.
///
/// For each direction, the distance below which `percent` % of the surface
/// area lies; the result is the larger of the two. `percent = 100` gives the
/// classic Hausdorff distance. A direction without surfels contributes
/// `+inf`, so the result is `+inf` whenever either surface is absent.
/// `percent` is not range-checked: values above 100 or NaN give the largest
/// distance, values at or below 0 the smallest.
///
/// # Example
///
/// ```
/// use surface_distance::{SurfaceDistances, compute_robust_hausdorff};
///
/// let set = SurfaceDistances::from_unsorted(
///     vec![0.0, 1.0, 5.0], vec![2.0, 1.0, 1.0],
///     vec![0.0, 2.0], vec![1.0, 1.0],
/// ).unwrap();
///
/// assert_eq!(compute_robust_hausdorff(&set, 100.0), 5.0);
/// assert_eq!(compute_robust_hausdorff(&set, 75.0), 2.0);
/// assert_eq!(compute_robust_hausdorff(&set, 50.0), 0.0);
/// ```
#[must_use]
pub fn compute_robust_hausdorff(surface_distances: &SurfaceDistances, percent: f64) -> f64 {
    let gt_to_pred = percentile_distance(
        surface_distances.distances_gt_to_pred(),
        surface_distances.surfel_areas_gt(),
        percent,
    );
    let pred_to_gt = percentile_distance(
        surface_distances.distances_pred_to_gt(),
        surface_distances.surfel_areas_pred(),
        percent,
    );
    gt_to_pred.max(pred_to_gt)
}

/// Fraction of each surface lying within `tolerance_mm` of the other.
///
/// Returns `(gt, pred)`: the share of ground-truth surface area within the
/// tolerance of the predicted surface, and vice versa. NaN for a direction
/// without surfels.
#[must_use]
pub fn compute_surface_overlap_at_tolerance(
    surface_distances: &SurfaceDistances,
    tolerance_mm: f64,
) -> (f64, f64) {
    let overlap_gt = area_within(
        surface_distances.distances_gt_to_pred(),
        surface_distances.surfel_areas_gt(),
        tolerance_mm,
    );
    let overlap_pred = area_within(
        surface_distances.distances_pred_to_gt(),
        surface_distances.surfel_areas_pred(),
        tolerance_mm,
    );
    (
        overlap_gt / surface_distances.total_area_gt(),
        overlap_pred / surface_distances.total_area_pred(),
    )
}

/// Surface Dice coefficient at `tolerance_mm`.
///
/// The surface area of both surfaces lying within the tolerance of the
/// other, divided by the total surface area of both. Symmetric in ground
/// truth and prediction, in `[0, 1]`, NaN when both surfaces are absent.
///
/// # Example
///
/// ```
/// use surface_distance::{SurfaceDistances, compute_surface_dice_at_tolerance};
///
/// let set = SurfaceDistances::from_unsorted(
///     vec![0.5, 2.0], vec![1.0, 1.0],
///     vec![0.0, 0.0], vec![1.0, 1.0],
/// ).unwrap();
///
/// assert_eq!(compute_surface_dice_at_tolerance(&set, 1.0), 0.75);
/// ```
#[must_use]
pub fn compute_surface_dice_at_tolerance(
    surface_distances: &SurfaceDistances,
    tolerance_mm: f64,
) -> f64 {
    let overlap_gt = area_within(
        surface_distances.distances_gt_to_pred(),
        surface_distances.surfel_areas_gt(),
        tolerance_mm,
    );
    let overlap_pred = area_within(
        surface_distances.distances_pred_to_gt(),
        surface_distances.surfel_areas_pred(),
        tolerance_mm,
    );
    (overlap_gt + overlap_pred)
        / (surface_distances.total_area_gt() + surface_distances.total_area_pred())
}

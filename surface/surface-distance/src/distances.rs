//! Surface-to-surface distances between two masks.

use std::cmp::Ordering;

use surface_types::{Spacing, Volume};
use tracing::debug;

use crate::distance_field::distance_field;
use crate::error::{SurfaceError, SurfaceResult};
use crate::extract::{Surface, extract_surfaces};

/// Distances from every surfel of one surface to the other surface, in both
/// directions, with the area of each surfel.
///
/// Within each direction the pairs are sorted by ascending distance (ties by
/// area), and each area stays aligned with its distance. The metric
/// functions rely on this order.
///
/// Deserialised sets are re-sorted and checked the same way as
/// [`SurfaceDistances::from_unsorted`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSurfaceDistances"))]
pub struct SurfaceDistances {
    distances_gt_to_pred: Vec<f64>,
    distances_pred_to_gt: Vec<f64>,
    surfel_areas_gt: Vec<f64>,
    surfel_areas_pred: Vec<f64>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSurfaceDistances {
    distances_gt_to_pred: Vec<f64>,
    distances_pred_to_gt: Vec<f64>,
    surfel_areas_gt: Vec<f64>,
    surfel_areas_pred: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSurfaceDistances> for SurfaceDistances {
    type Error = SurfaceError;

    fn try_from(raw: RawSurfaceDistances) -> SurfaceResult<Self> {
        Self::from_unsorted(
            raw.distances_gt_to_pred,
            raw.surfel_areas_gt,
            raw.distances_pred_to_gt,
            raw.surfel_areas_pred,
        )
    }
}

impl SurfaceDistances {
    /// A set with no surfels in either direction.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            distances_gt_to_pred: Vec::new(),
            distances_pred_to_gt: Vec::new(),
            surfel_areas_gt: Vec::new(),
            surfel_areas_pred: Vec::new(),
        }
    }

    /// Builds a set from unsorted per-surfel distances and areas.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::LengthMismatch`] if a direction's distances
    /// and areas differ in length.
    ///
    /// # Example
    ///
    /// ```
    /// use surface_distance::SurfaceDistances;
    ///
    /// let set = SurfaceDistances::from_unsorted(
    ///     vec![2.0, 0.0, 1.0],
    ///     vec![0.2, 0.3, 0.1],
    ///     vec![0.5],
    ///     vec![1.0],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(set.distances_gt_to_pred(), &[0.0, 1.0, 2.0]);
    /// assert_eq!(set.surfel_areas_gt(), &[0.3, 0.1, 0.2]);
    /// ```
    pub fn from_unsorted(
        distances_gt_to_pred: Vec<f64>,
        surfel_areas_gt: Vec<f64>,
        distances_pred_to_gt: Vec<f64>,
        surfel_areas_pred: Vec<f64>,
    ) -> SurfaceResult<Self> {
        let (distances_gt_to_pred, surfel_areas_gt) =
            sort_direction("gt_to_pred", distances_gt_to_pred, surfel_areas_gt)?;
        let (distances_pred_to_gt, surfel_areas_pred) =
            sort_direction("pred_to_gt", distances_pred_to_gt, surfel_areas_pred)?;
        Ok(Self {
            distances_gt_to_pred,
            distances_pred_to_gt,
            surfel_areas_gt,
            surfel_areas_pred,
        })
    }

    /// Distances in mm from each ground-truth surfel to the predicted surface.
    #[must_use]
    pub fn distances_gt_to_pred(&self) -> &[f64] {
        &self.distances_gt_to_pred
    }

    /// Distances in mm from each predicted surfel to the ground-truth surface.
    #[must_use]
    pub fn distances_pred_to_gt(&self) -> &[f64] {
        &self.distances_pred_to_gt
    }

    /// Areas in mm² of the ground-truth surfels, aligned with
    /// [`Self::distances_gt_to_pred`].
    #[must_use]
    pub fn surfel_areas_gt(&self) -> &[f64] {
        &self.surfel_areas_gt
    }

    /// Areas in mm² of the predicted surfels, aligned with
    /// [`Self::distances_pred_to_gt`].
    #[must_use]
    pub fn surfel_areas_pred(&self) -> &[f64] {
        &self.surfel_areas_pred
    }

    /// Number of ground-truth surfels.
    #[must_use]
    pub fn len_gt(&self) -> usize {
        self.distances_gt_to_pred.len()
    }

    /// Number of predicted surfels.
    #[must_use]
    pub fn len_pred(&self) -> usize {
        self.distances_pred_to_gt.len()
    }

    /// Returns `true` if neither surface has a surfel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances_gt_to_pred.is_empty() && self.distances_pred_to_gt.is_empty()
    }

    /// Total ground-truth surface area in mm².
    #[must_use]
    pub fn total_area_gt(&self) -> f64 {
        self.surfel_areas_gt.iter().sum()
    }

    /// Total predicted surface area in mm².
    #[must_use]
    pub fn total_area_pred(&self) -> f64 {
        self.surfel_areas_pred.iter().sum()
    }

    /// The same set with ground truth and prediction exchanged.
    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            distances_gt_to_pred: self.distances_pred_to_gt,
            distances_pred_to_gt: self.distances_gt_to_pred,
            surfel_areas_gt: self.surfel_areas_pred,
            surfel_areas_pred: self.surfel_areas_gt,
        }
    }
}

fn pair_order(a: &(f64, f64), b: &(f64, f64)) -> Ordering {
    a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1))
}

fn sort_direction(
    direction: &'static str,
    distances: Vec<f64>,
    areas: Vec<f64>,
) -> SurfaceResult<(Vec<f64>, Vec<f64>)> {
    if distances.len() != areas.len() {
        return Err(SurfaceError::LengthMismatch {
            direction,
            distances: distances.len(),
            areas: areas.len(),
        });
    }
    let mut pairs: Vec<(f64, f64)> = distances.into_iter().zip(areas).collect();
    pairs.sort_unstable_by(pair_order);
    Ok(pairs.into_iter().unzip())
}

/// Samples `opposing_field` at every surfel of `surface`, sorted by distance.
fn collect_direction(surface: &Surface, opposing_field: &Volume<f64>) -> (Vec<f64>, Vec<f64>) {
    let distances = opposing_field.as_slice();
    let areas = surface.areas().as_slice();
    let mut pairs: Vec<(f64, f64)> = surface
        .border()
        .true_indices()
        .map(|idx| (distances[idx], areas[idx]))
        .collect();
    pairs.sort_unstable_by(pair_order);
    pairs.into_iter().unzip()
}

/// Computes the distance from every surfel of each mask to the other mask's
/// surface.
///
/// Both masks must have the same shape; `spacing` gives the voxel size in mm
/// along `x0`, `x1` and `x2`. If both masks are empty the result is
/// [`SurfaceDistances::empty`]. If only one is empty, its direction is empty
/// and every distance of the other direction is `+inf`.
///
/// # Errors
///
/// Returns [`SurfaceError::ShapeMismatch`] if the masks differ in shape.
///
/// # Example
///
/// ```
/// use surface_distance::compute_surface_distances;
/// use surface_types::{Spacing, Volume};
///
/// let mut gt = Volume::filled([5, 5, 5], false).unwrap();
/// gt[[2, 2, 2]] = true;
/// let mut pred = Volume::filled([5, 5, 5], false).unwrap();
/// pred[[2, 2, 3]] = true;
///
/// let set = compute_surface_distances(&gt, &pred, &Spacing::unit()).unwrap();
/// assert_eq!(set.len_gt(), 8);
/// assert_eq!(set.distances_gt_to_pred(), &[0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
/// ```
pub fn compute_surface_distances(
    mask_gt: &Volume<bool>,
    mask_pred: &Volume<bool>,
    spacing: &Spacing,
) -> SurfaceResult<SurfaceDistances> {
    let Some(surfaces) = extract_surfaces(mask_gt, mask_pred, spacing)? else {
        return Ok(SurfaceDistances::empty());
    };

    let field_gt = distance_field(surfaces.gt.border(), spacing);
    let field_pred = distance_field(surfaces.pred.border(), spacing);

    let (distances_gt_to_pred, surfel_areas_gt) = collect_direction(&surfaces.gt, &field_pred);
    let (distances_pred_to_gt, surfel_areas_pred) = collect_direction(&surfaces.pred, &field_gt);
    debug!(
        surfels_gt = distances_gt_to_pred.len(),
        surfels_pred = distances_pred_to_gt.len(),
        "collected surface distances"
    );

    Ok(SurfaceDistances {
        distances_gt_to_pred,
        distances_pred_to_gt,
        surfel_areas_gt,
        surfel_areas_pred,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn mask_with(dims: [usize; 3], voxels: &[[usize; 3]]) -> Volume<bool> {
        let mut mask = Volume::filled(dims, false).unwrap();
        for &v in voxels {
            mask[v] = true;
        }
        mask
    }

    fn is_sorted(values: &[f64]) -> bool {
        values.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_both_empty() {
        let empty = Volume::filled([4, 4, 4], false).unwrap();
        let set = compute_surface_distances(&empty, &empty, &Spacing::unit()).unwrap();
        assert!(set.is_empty());
        assert_eq!(set, SurfaceDistances::empty());
    }

    #[test]
    fn test_shape_mismatch() {
        let a = Volume::filled([4, 4, 4], false).unwrap();
        let b = Volume::filled([4, 5, 4], false).unwrap();
        assert!(matches!(
            compute_surface_distances(&a, &b, &Spacing::unit()),
            Err(SurfaceError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_prediction_empty() {
        let gt = mask_with([4, 4, 4], &[[1, 1, 1]]);
        let pred = Volume::filled([4, 4, 4], false).unwrap();
        let set = compute_surface_distances(&gt, &pred, &Spacing::unit()).unwrap();

        assert_eq!(set.len_gt(), 8);
        assert_eq!(set.len_pred(), 0);
        assert!(set.distances_gt_to_pred().iter().all(|d| d.is_infinite()));
        assert!(set.surfel_areas_pred().is_empty());
        assert_relative_eq!(set.total_area_gt(), 3.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_identical_masks_are_zero_distance() {
        let voxels = [[1, 1, 1], [1, 2, 1], [2, 2, 1], [2, 2, 2]];
        let mask = mask_with([4, 4, 4], &voxels);
        let set = compute_surface_distances(&mask, &mask, &Spacing::unit()).unwrap();
        assert!(set.len_gt() > 0);
        assert_eq!(set.len_gt(), set.len_pred());
        assert!(set.distances_gt_to_pred().iter().all(|&d| d == 0.0));
        assert!(set.distances_pred_to_gt().iter().all(|&d| d == 0.0));
        assert_relative_eq!(set.total_area_gt(), set.total_area_pred());
    }

    #[test]
    fn test_two_voxels_two_apart() {
        let gt = mask_with([5, 5, 5], &[[2, 2, 2]]);
        let pred = mask_with([5, 5, 5], &[[2, 2, 4]]);
        let set = compute_surface_distances(&gt, &pred, &Spacing::unit()).unwrap();
        // The facing corner points are one apart, the far ones two.
        assert_eq!(
            set.distances_gt_to_pred(),
            &[1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0]
        );
        assert_eq!(set.distances_pred_to_gt(), set.distances_gt_to_pred());
    }

    #[test]
    fn test_distances_scale_with_spacing() {
        let gt = mask_with([5, 5, 5], &[[2, 2, 2]]);
        let pred = mask_with([5, 5, 5], &[[2, 2, 4]]);
        let set =
            compute_surface_distances(&gt, &pred, &Spacing::new(1.0, 1.0, 3.0).unwrap()).unwrap();
        assert_eq!(
            set.distances_gt_to_pred(),
            &[3.0, 3.0, 3.0, 3.0, 6.0, 6.0, 6.0, 6.0]
        );
    }

    #[test]
    fn test_output_sorted_and_paired() {
        let gt = mask_with([6, 6, 6], &[[1, 1, 1], [1, 1, 2], [4, 4, 4]]);
        let pred = mask_with([6, 6, 6], &[[1, 1, 1], [2, 1, 1]]);
        let spacing = Spacing::new(1.5, 1.0, 0.5).unwrap();
        let set = compute_surface_distances(&gt, &pred, &spacing).unwrap();

        assert!(is_sorted(set.distances_gt_to_pred()));
        assert!(is_sorted(set.distances_pred_to_gt()));
        assert_eq!(set.surfel_areas_gt().len(), set.len_gt());
        assert_eq!(set.surfel_areas_pred().len(), set.len_pred());
        assert!(set.surfel_areas_gt().iter().all(|&a| a > 0.0));
    }

    #[test]
    fn test_from_unsorted_length_mismatch() {
        let err = SurfaceDistances::from_unsorted(vec![1.0], vec![], vec![], vec![]).unwrap_err();
        assert_eq!(
            err,
            SurfaceError::LengthMismatch {
                direction: "gt_to_pred",
                distances: 1,
                areas: 0
            }
        );
    }

    #[test]
    fn test_from_unsorted_keeps_pairs() {
        let set = SurfaceDistances::from_unsorted(
            vec![],
            vec![],
            vec![3.0, 1.0, 1.0, 2.0],
            vec![0.3, 0.2, 0.1, 0.4],
        )
        .unwrap();
        assert_eq!(set.distances_pred_to_gt(), &[1.0, 1.0, 2.0, 3.0]);
        assert_eq!(set.surfel_areas_pred(), &[0.1, 0.2, 0.4, 0.3]);
    }

    #[test]
    fn test_swapped() {
        let set =
            SurfaceDistances::from_unsorted(vec![1.0], vec![0.5], vec![2.0, 3.0], vec![0.1, 0.2])
                .unwrap();
        let swapped = set.clone().swapped();
        assert_eq!(swapped.distances_gt_to_pred(), set.distances_pred_to_gt());
        assert_eq!(swapped.surfel_areas_pred(), set.surfel_areas_gt());
        assert_eq!(swapped.swapped(), set);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_sorts_and_checks_lengths() {
        let set: SurfaceDistances = serde_json::from_str(
            r#"{
                "distances_gt_to_pred": [3.0, 1.0, 2.0],
                "surfel_areas_gt": [0.3, 0.1, 0.2],
                "distances_pred_to_gt": [],
                "surfel_areas_pred": []
            }"#,
        )
        .unwrap();
        assert_eq!(set.distances_gt_to_pred(), &[1.0, 2.0, 3.0]);
        assert_eq!(set.surfel_areas_gt(), &[0.1, 0.2, 0.3]);

        let mismatched = serde_json::from_str::<SurfaceDistances>(
            r#"{
                "distances_gt_to_pred": [3.0, 1.0, 2.0],
                "surfel_areas_gt": [1.0],
                "distances_pred_to_gt": [],
                "surfel_areas_pred": []
            }"#,
        );
        let err = mismatched.unwrap_err().to_string();
        assert!(err.contains("3 distances but 1 surfel areas"), "{err}");
    }
}

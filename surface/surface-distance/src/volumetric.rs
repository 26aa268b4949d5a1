//! Voxel-overlap agreement between two masks.

use surface_types::Volume;

use crate::error::{SurfaceError, SurfaceResult};

/// Sørensen-Dice coefficient of two masks: `2|A∩B| / (|A| + |B|)`.
///
/// NaN when both masks are empty.
///
/// # Errors
///
/// Returns [`SurfaceError::ShapeMismatch`] if the masks differ in shape.
///
/// # Example
///
/// ```
/// use surface_distance::compute_dice_coefficient;
/// use surface_types::Volume;
///
/// let gt = Volume::new([1, 1, 4], vec![true, true, false, false]).unwrap();
/// let pred = Volume::new([1, 1, 4], vec![false, true, true, false]).unwrap();
///
/// assert_eq!(compute_dice_coefficient(&gt, &pred).unwrap(), 0.5);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn compute_dice_coefficient(
    mask_gt: &Volume<bool>,
    mask_pred: &Volume<bool>,
) -> SurfaceResult<f64> {
    if mask_gt.dims() != mask_pred.dims() {
        return Err(SurfaceError::shape_mismatch(mask_gt.dims(), mask_pred.dims()));
    }

    let volume_sum = mask_gt.count_true() + mask_pred.count_true();
    if volume_sum == 0 {
        return Ok(f64::NAN);
    }
    let intersection = mask_gt
        .iter()
        .zip(mask_pred.iter())
        .filter(|&(&a, &b)| a && b)
        .count();
    Ok(2.0 * intersection as f64 / volume_sum as f64)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn block(dims: [usize; 3], lo: [usize; 3], hi: [usize; 3]) -> Volume<bool> {
        Volume::from_fn(dims, |c| (0..3).all(|a| c[a] >= lo[a] && c[a] < hi[a])).unwrap()
    }

    #[test]
    fn test_both_empty_is_nan() {
        let empty = Volume::filled([3, 3, 3], false).unwrap();
        assert!(compute_dice_coefficient(&empty, &empty).unwrap().is_nan());
    }

    #[test]
    fn test_identical_is_one() {
        let mask = block([6, 6, 6], [1, 1, 1], [4, 5, 3]);
        assert_eq!(compute_dice_coefficient(&mask, &mask).unwrap(), 1.0);
    }

    #[test]
    fn test_disjoint_is_zero() {
        let a = block([6, 6, 6], [0, 0, 0], [2, 2, 2]);
        let b = block([6, 6, 6], [3, 3, 3], [5, 5, 5]);
        assert_eq!(compute_dice_coefficient(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_dilated_cube() {
        // 10^3 cube against the same cube grown by one voxel on both x0 sides.
        let gt = block([12, 10, 10], [1, 0, 0], [11, 10, 10]);
        let pred = block([12, 10, 10], [0, 0, 0], [12, 10, 10]);
        let expected = 2.0 * 1000.0 / (1000.0 + 1200.0);
        assert_relative_eq!(compute_dice_coefficient(&gt, &pred).unwrap(), expected);
    }

    #[test]
    fn test_shape_mismatch() {
        let a = Volume::filled([2, 2, 2], true).unwrap();
        let b = Volume::filled([2, 2, 1], true).unwrap();
        assert!(compute_dice_coefficient(&a, &b).is_err());
    }
}

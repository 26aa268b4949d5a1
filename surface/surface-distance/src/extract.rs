//! Surface extraction from binary masks.
//!
//! Surfels live on corner points, each straddling 8 voxels. The masks are
//! cropped to the bounding box of their union and padded by one false
//! voxel on the maximum side of every axis. Correlating the padded crop
//! with the 2x2x2 stencil, treating everything before index 0 as false,
//! then yields the code of every corner point that touches the union,
//! exactly as on the uncropped volume.

use rayon::prelude::*;
use surface_types::{Spacing, Volume, VoxelBounds};
use tracing::debug;

use crate::area::SurfelAreaTable;
use crate::error::{SurfaceError, SurfaceResult};

/// The 2x2x2 stencil in raster order with its code weights.
///
/// Corner point `c` covers voxels `c - 1` and `c` along every axis; the
/// offset below is added to `c - 1`.
const STENCIL: [([usize; 3], u8); 8] = [
    ([0, 0, 0], 128),
    ([0, 0, 1], 64),
    ([0, 1, 0], 32),
    ([0, 1, 1], 16),
    ([1, 0, 0], 8),
    ([1, 0, 1], 4),
    ([1, 1, 0], 2),
    ([1, 1, 1], 1),
];

/// Code of a corner point with no voxel set.
pub const CODE_OUTSIDE: u8 = 0;
/// Code of a corner point with all 8 voxels set.
pub const CODE_INSIDE: u8 = 255;

/// Crops `mask` to `bounds` and appends one false voxel on the maximum side
/// of each axis.
///
/// The result has dimensions `bounds.extent() + 1`. Voxel `[0, 0, 0]` of the
/// result is voxel `bounds.min` of `mask`. No padding is added on the
/// minimum side.
///
/// # Errors
///
/// Returns an error if the padded dimensions overflow.
///
/// # Example
///
/// ```
/// use surface_distance::crop_and_pad;
/// use surface_types::{Volume, VoxelBounds};
///
/// let mut mask = Volume::filled([5, 5, 5], false).unwrap();
/// mask[[2, 2, 2]] = true;
/// mask[[3, 2, 2]] = true;
///
/// let bounds = VoxelBounds::of_mask(&mask).unwrap();
/// let padded = crop_and_pad(&mask, &bounds).unwrap();
///
/// assert_eq!(padded.dims(), [3, 2, 2]);
/// assert_eq!(padded.count_true(), 2);
/// assert!(padded[[0, 0, 0]] && padded[[1, 0, 0]]);
/// assert!(!padded[[2, 0, 0]]);
/// ```
pub fn crop_and_pad(mask: &Volume<bool>, bounds: &VoxelBounds) -> SurfaceResult<Volume<bool>> {
    let extent = bounds.extent();
    let padded_dims = [extent[0] + 1, extent[1] + 1, extent[2] + 1];
    let min = bounds.min;

    let padded = Volume::from_fn(padded_dims, |[i, j, k]| {
        i < extent[0]
            && j < extent[1]
            && k < extent[2]
            && mask
                .get([min[0] + i, min[1] + j, min[2] + k])
                .copied()
                .unwrap_or(false)
    })?;
    Ok(padded)
}

/// Neighbour code of every corner point of `padded`.
///
/// The output has the same dimensions as the input. Voxels outside the
/// input are treated as false.
///
/// # Example
///
/// ```
/// use surface_distance::neighbour_codes;
/// use surface_types::Volume;
///
/// // One voxel plus max-side padding.
/// let mut padded = Volume::filled([2, 2, 2], false).unwrap();
/// padded[[0, 0, 0]] = true;
///
/// let codes = neighbour_codes(&padded);
/// // The voxel is the last stencil entry of corner [0, 0, 0] ...
/// assert_eq!(codes[[0, 0, 0]], 1);
/// // ... and the first stencil entry of corner [1, 1, 1].
/// assert_eq!(codes[[1, 1, 1]], 128);
/// ```
#[must_use]
pub fn neighbour_codes(padded: &Volume<bool>) -> Volume<u8> {
    let dims = padded.dims();
    let slab = dims[1] * dims[2];
    let mut codes = padded.map(|_| CODE_OUTSIDE);
    if slab == 0 {
        return codes;
    }

    codes
        .as_mut_slice()
        .par_chunks_mut(slab)
        .enumerate()
        .for_each(|(c0, out)| {
            for c1 in 0..dims[1] {
                for c2 in 0..dims[2] {
                    out[c1 * dims[2] + c2] = corner_code(padded, [c0, c1, c2]);
                }
            }
        });
    codes
}

fn corner_code(mask: &Volume<bool>, corner: [usize; 3]) -> u8 {
    STENCIL
        .iter()
        .filter(|(offset, _)| {
            let voxel = [
                (corner[0] + offset[0]).checked_sub(1),
                (corner[1] + offset[1]).checked_sub(1),
                (corner[2] + offset[2]).checked_sub(1),
            ];
            match voxel {
                [Some(i), Some(j), Some(k)] => mask.get([i, j, k]).copied().unwrap_or(false),
                _ => false,
            }
        })
        .fold(CODE_OUTSIDE, |code, (_, weight)| code | weight)
}

/// Corner points crossed by the surface: codes other than 0 and 255.
#[must_use]
pub fn border_mask(codes: &Volume<u8>) -> Volume<bool> {
    codes.map(|&code| code != CODE_OUTSIDE && code != CODE_INSIDE)
}

/// Implicit surface of one mask on the padded corner grid.
#[derive(Debug, Clone)]
pub struct Surface {
    codes: Volume<u8>,
    border: Volume<bool>,
    areas: Volume<f64>,
}

impl Surface {
    /// Builds the code, border and area maps of a padded crop.
    #[must_use]
    pub fn from_padded(padded: &Volume<bool>, table: &SurfelAreaTable) -> Self {
        let codes = neighbour_codes(padded);
        let border = border_mask(&codes);
        let areas = codes.map(|&code| table.area(code));
        Self {
            codes,
            border,
            areas,
        }
    }

    /// Neighbour code per corner point.
    #[must_use]
    pub const fn codes(&self) -> &Volume<u8> {
        &self.codes
    }

    /// Corner points carrying a surfel.
    #[must_use]
    pub const fn border(&self) -> &Volume<bool> {
        &self.border
    }

    /// Surfel area per corner point in mm² (zero off the border).
    #[must_use]
    pub const fn areas(&self) -> &Volume<f64> {
        &self.areas
    }

    /// Number of surfels.
    #[must_use]
    pub fn surfel_count(&self) -> usize {
        self.border.count_true()
    }

    /// Total surface area in mm².
    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.border
            .true_indices()
            .map(|idx| self.areas.as_slice()[idx])
            .sum()
    }
}

/// Surfaces of a ground-truth and a predicted mask on a shared corner grid.
#[derive(Debug, Clone)]
pub struct ExtractedSurfaces {
    /// Bounding box of the union of both masks, in input voxel coordinates.
    pub bounds: VoxelBounds,
    /// Ground-truth surface.
    pub gt: Surface,
    /// Predicted surface.
    pub pred: Surface,
}

/// Extracts both surfaces on the corner grid of the union bounding box.
///
/// Returns `Ok(None)` when both masks are empty.
///
/// # Errors
///
/// Returns [`SurfaceError::ShapeMismatch`] if the masks differ in shape.
pub fn extract_surfaces(
    mask_gt: &Volume<bool>,
    mask_pred: &Volume<bool>,
    spacing: &Spacing,
) -> SurfaceResult<Option<ExtractedSurfaces>> {
    if mask_gt.dims() != mask_pred.dims() {
        return Err(SurfaceError::shape_mismatch(mask_gt.dims(), mask_pred.dims()));
    }

    let union = mask_gt.union(mask_pred)?;
    let Some(bounds) = VoxelBounds::of_mask(&union) else {
        debug!("both masks are empty, no surface to extract");
        return Ok(None);
    };
    debug!(min = ?bounds.min, max = ?bounds.max, "cropped to union bounding box");

    let table = SurfelAreaTable::new(spacing);
    let gt = Surface::from_padded(&crop_and_pad(mask_gt, &bounds)?, &table);
    let pred = Surface::from_padded(&crop_and_pad(mask_pred, &bounds)?, &table);
    debug!(
        surfels_gt = gt.surfel_count(),
        surfels_pred = pred.surfel_count(),
        "extracted surfaces"
    );

    Ok(Some(ExtractedSurfaces { bounds, gt, pred }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
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

    /// Codes computed directly on the uncropped volume, for comparison.
    fn full_codes(mask: &Volume<bool>) -> Volume<u8> {
        let dims = mask.dims();
        Volume::from_fn([dims[0] + 1, dims[1] + 1, dims[2] + 1], |c| corner_code(mask, c)).unwrap()
    }

    #[test]
    fn test_padding_only_on_max_side() {
        let mask = mask_with([6, 6, 6], &[[1, 2, 3], [3, 4, 3]]);
        let bounds = VoxelBounds::of_mask(&mask).unwrap();
        let padded = crop_and_pad(&mask, &bounds).unwrap();

        assert_eq!(padded.dims(), [4, 4, 2]);
        assert!(padded[[0, 0, 0]]);
        assert!(padded[[2, 2, 0]]);
        // Last slice of every axis is padding.
        assert!((0..4).all(|j| (0..2).all(|k| !padded[[3, j, k]])));
        assert!((0..4).all(|i| (0..2).all(|k| !padded[[i, 3, k]])));
        assert!((0..4).all(|i| (0..4).all(|j| !padded[[i, j, 1]])));
    }

    #[test]
    fn test_single_voxel_corner_codes() {
        let padded = mask_with([2, 2, 2], &[[0, 0, 0]]);
        let codes = neighbour_codes(&padded);
        // Each of the 8 corners of the voxel sees it at a different bit.
        let expected = [
            ([0, 0, 0], 1),
            ([0, 0, 1], 2),
            ([0, 1, 0], 4),
            ([0, 1, 1], 8),
            ([1, 0, 0], 16),
            ([1, 0, 1], 32),
            ([1, 1, 0], 64),
            ([1, 1, 1], 128),
        ];
        for (corner, code) in expected {
            assert_eq!(codes[corner], code, "corner {corner:?}");
        }
        assert_eq!(border_mask(&codes).count_true(), 8);
    }

    #[test]
    fn test_cropped_codes_match_uncropped() {
        let mask = mask_with(
            [7, 6, 5],
            &[[2, 1, 1], [3, 1, 1], [3, 2, 1], [3, 2, 2], [4, 3, 3], [2, 3, 2]],
        );
        let bounds = VoxelBounds::of_mask(&mask).unwrap();
        let cropped = neighbour_codes(&crop_and_pad(&mask, &bounds).unwrap());
        let full = full_codes(&mask);

        // Every corner of the cropped grid maps onto the same code of the full grid.
        for idx in 0..cropped.len() {
            let [i, j, k] = cropped.coord_of(idx);
            let full_corner = [bounds.min[0] + i, bounds.min[1] + j, bounds.min[2] + k];
            assert_eq!(cropped.as_slice()[idx], full[full_corner]);
        }
        // And no border corner of the full grid is lost.
        assert_eq!(
            border_mask(&cropped).count_true(),
            border_mask(&full).count_true()
        );
    }

    #[test]
    fn test_solid_block_interior_is_not_border() {
        let voxels: Vec<_> = (1..4)
            .flat_map(|i| (1..4).flat_map(move |j| (1..4).map(move |k| [i, j, k])))
            .collect();
        let mask = mask_with([5, 5, 5], &voxels);
        let bounds = VoxelBounds::of_mask(&mask).unwrap();
        let codes = neighbour_codes(&crop_and_pad(&mask, &bounds).unwrap());
        assert_eq!(codes.dims(), [4, 4, 4]);
        // Interior corners of a 3x3x3 block are fully inside.
        assert_eq!(codes[[1, 1, 1]], CODE_INSIDE);
        assert_eq!(codes[[2, 2, 2]], CODE_INSIDE);
        // 4^3 corners minus 2^3 interior ones.
        assert_eq!(border_mask(&codes).count_true(), 56);
    }

    #[test]
    fn test_extract_shape_mismatch() {
        let a = Volume::filled([3, 3, 3], false).unwrap();
        let b = Volume::filled([3, 3, 4], false).unwrap();
        let err = extract_surfaces(&a, &b, &Spacing::unit()).unwrap_err();
        assert_eq!(err, SurfaceError::shape_mismatch([3, 3, 3], [3, 3, 4]));
    }

    #[test]
    fn test_extract_empty_union() {
        let a = Volume::filled([3, 3, 3], false).unwrap();
        assert!(extract_surfaces(&a, &a, &Spacing::unit()).unwrap().is_none());
    }

    #[test]
    fn test_extract_one_sided() {
        let gt = mask_with([4, 4, 4], &[[1, 1, 1]]);
        let pred = Volume::filled([4, 4, 4], false).unwrap();
        let surfaces = extract_surfaces(&gt, &pred, &Spacing::unit())
            .unwrap()
            .unwrap();
        assert_eq!(surfaces.bounds, VoxelBounds::new([1, 1, 1], [1, 1, 1]));
        assert_eq!(surfaces.gt.surfel_count(), 8);
        assert_eq!(surfaces.pred.surfel_count(), 0);
        assert_relative_eq!(surfaces.gt.total_area(), 3.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(surfaces.pred.total_area(), 0.0);
    }

    #[test]
    fn test_isolated_voxel_area_anisotropic() {
        let gt = mask_with([3, 3, 3], &[[1, 1, 1]]);
        let spacing = Spacing::new(2.0, 1.0, 1.0).unwrap();
        let surfaces = extract_surfaces(&gt, &gt, &spacing).unwrap().unwrap();
        assert_relative_eq!(surfaces.gt.total_area(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_voxel_on_volume_edge() {
        // Corner points before index 0 come from the implicit false boundary.
        let gt = mask_with([2, 2, 2], &[[0, 0, 0]]);
        let surfaces = extract_surfaces(&gt, &gt, &Spacing::unit())
            .unwrap()
            .unwrap();
        assert_eq!(surfaces.gt.codes().dims(), [2, 2, 2]);
        assert_eq!(surfaces.gt.surfel_count(), 8);
    }
}

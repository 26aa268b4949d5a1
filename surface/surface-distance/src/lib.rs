//! Surface distance metrics for binary segmentation volumes.
//!
//! Compares a ground-truth mask with a predicted mask through their implicit
//! surfaces. Both surfaces are sampled at corner points between voxels; each
//! corner point crossed by a surface carries a surfel whose area comes from
//! a fixed marching-cubes table scaled by the voxel spacing. An exact
//! Euclidean distance transform then gives every surfel's distance to the
//! other surface.
//!
//! # Pipeline
//!
//! 1. [`SurfelAreaTable`] - Area of every 2x2x2 neighbour code at the given spacing
//! 2. [`extract_surfaces`] - Crop to the union bounding box, pad the maximum
//!    side, compute [`neighbour_codes`] and border masks
//! 3. [`distance_field`] - Exact anisotropic distance to each border
//! 4. [`compute_surface_distances`] - Sorted (distance, area) pairs in both directions
//! 5. Metrics over [`SurfaceDistances`]:
//!    - [`compute_average_surface_distance`]
//!    - [`compute_robust_hausdorff`]
//!    - [`compute_surface_overlap_at_tolerance`]
//!    - [`compute_surface_dice_at_tolerance`]
//!
//! [`compute_dice_coefficient`] gives the plain volumetric Dice for comparison.
//!
//! No explicit mesh is ever built.
//!
//! # Example
//!
//! ```
//! use surface_distance::{
//!     compute_average_surface_distance, compute_robust_hausdorff,
//!     compute_surface_dice_at_tolerance, compute_surface_distances,
//! };
//! use surface_types::{Spacing, Volume};
//!
//! // Two 4x4x4 cubes, the prediction shifted by one voxel along x0.
//! let gt = Volume::from_fn([8, 8, 8], |[i, j, k]| {
//!     (2..6).contains(&i) && (2..6).contains(&j) && (2..6).contains(&k)
//! })
//! .unwrap();
//! let pred = Volume::from_fn([8, 8, 8], |[i, j, k]| {
//!     (3..7).contains(&i) && (2..6).contains(&j) && (2..6).contains(&k)
//! })
//! .unwrap();
//!
//! let spacing = Spacing::new(2.0, 1.0, 1.0).unwrap();
//! let distances = compute_surface_distances(&gt, &pred, &spacing).unwrap();
//!
//! let (gt_to_pred, pred_to_gt) = compute_average_surface_distance(&distances);
//! assert!(gt_to_pred > 0.0 && pred_to_gt > 0.0);
//!
//! // The farthest surfel is exactly one voxel (2 mm) away.
//! assert_eq!(compute_robust_hausdorff(&distances, 100.0), 2.0);
//!
//! // Every surfel is within 2 mm of the other surface.
//! assert_eq!(compute_surface_dice_at_tolerance(&distances, 2.0), 1.0);
//! ```
//!
//! # Degenerate Inputs
//!
//! Empty masks are not errors. Two empty masks give an empty
//! [`SurfaceDistances`]; ratios over zero area are NaN and the Hausdorff
//! distance is `+inf` whenever either surface is absent. Shape mismatches
//! and invalid spacing are reported through [`SurfaceError`].

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod area;
mod distance_field;
mod distances;
mod error;
mod extract;
mod metrics;
mod normals;
mod volumetric;

pub use area::{SurfelAreaTable, area_for_code};
pub use distance_field::distance_field;
pub use distances::{SurfaceDistances, compute_surface_distances};
pub use error::{SurfaceError, SurfaceResult};
pub use extract::{
    CODE_INSIDE, CODE_OUTSIDE, ExtractedSurfaces, Surface, border_mask, crop_and_pad,
    extract_surfaces, neighbour_codes,
};
pub use metrics::{
    compute_average_surface_distance, compute_robust_hausdorff,
    compute_surface_dice_at_tolerance, compute_surface_overlap_at_tolerance,
};
pub use normals::{NEIGHBOUR_CODE_COUNT, normals_for_code};
pub use volumetric::compute_dice_coefficient;

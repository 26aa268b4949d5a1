//! Axis-aligned voxel bounding boxes.

use crate::volume::Volume;

/// Axis-aligned bounds in voxel index space.
///
/// Both corners are inclusive.
///
/// # Example
///
/// ```
/// use surface_types::{Volume, VoxelBounds};
///
/// let mut mask = Volume::filled([10, 10, 10], false).unwrap();
/// mask[[2, 3, 4]] = true;
/// mask[[5, 3, 1]] = true;
///
/// let bounds = VoxelBounds::of_mask(&mask).unwrap();
/// assert_eq!(bounds.min, [2, 3, 1]);
/// assert_eq!(bounds.max, [5, 3, 4]);
/// assert_eq!(bounds.extent(), [4, 1, 4]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoxelBounds {
    /// Minimum corner (inclusive).
    pub min: [usize; 3],
    /// Maximum corner (inclusive).
    pub max: [usize; 3],
}

impl VoxelBounds {
    /// Creates bounds from two corners, ordering them per axis.
    #[must_use]
    pub fn new(a: [usize; 3], b: [usize; 3]) -> Self {
        Self {
            min: [a[0].min(b[0]), a[1].min(b[1]), a[2].min(b[2])],
            max: [a[0].max(b[0]), a[1].max(b[1]), a[2].max(b[2])],
        }
    }

    /// Tight bounds of the `true` voxels of `mask`, or `None` if it is empty.
    ///
    /// Each axis is handled independently: the mask is max-projected onto
    /// the axis and the first and last occupied positions are taken.
    #[must_use]
    pub fn of_mask(mask: &Volume<bool>) -> Option<Self> {
        let dims = mask.dims();
        let mut projections = [
            vec![false; dims[0]],
            vec![false; dims[1]],
            vec![false; dims[2]],
        ];
        for [i, j, k] in mask.true_coords() {
            projections[0][i] = true;
            projections[1][j] = true;
            projections[2][k] = true;
        }

        let mut min = [0; 3];
        let mut max = [0; 3];
        for (axis, projection) in projections.iter().enumerate() {
            min[axis] = projection.iter().position(|&v| v)?;
            max[axis] = projection.iter().rposition(|&v| v)?;
        }
        Some(Self { min, max })
    }

    /// Number of voxels covered along each axis (`max - min + 1`).
    #[must_use]
    pub const fn extent(&self) -> [usize; 3] {
        [
            self.max[0] - self.min[0] + 1,
            self.max[1] - self.min[1] + 1,
            self.max[2] - self.min[2] + 1,
        ]
    }

    /// Total number of voxels covered.
    #[must_use]
    pub fn volume(&self) -> usize {
        self.extent().iter().product()
    }

    /// Checks whether `coord` lies inside the bounds.
    #[must_use]
    pub const fn contains(&self, coord: [usize; 3]) -> bool {
        coord[0] >= self.min[0]
            && coord[0] <= self.max[0]
            && coord[1] >= self.min[1]
            && coord[1] <= self.max[1]
            && coord[2] >= self.min[2]
            && coord[2] <= self.max[2]
    }
}

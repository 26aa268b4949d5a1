//! Physical surfel areas per neighbour code.

use nalgebra::Vector3;
use surface_types::Spacing;

use crate::normals::{NEIGHBOUR_CODE_COUNT, normals_for_code};

/// Surfel area in mm² for each of the 256 neighbour codes at a fixed spacing.
///
/// Each unit-cube normal `(nx, ny, nz)` is scaled to
/// `(nx·s1·s2, ny·s0·s2, nz·s0·s1)` and its Euclidean norm is added to the
/// code's area. The table is built once per spacing and shared by every
/// lookup of an evaluation.
///
/// # Example
///
/// ```
/// use surface_distance::SurfelAreaTable;
/// use surface_types::Spacing;
///
/// let table = SurfelAreaTable::new(&Spacing::unit());
/// assert_eq!(table.area(0), 0.0);
/// assert_eq!(table.area(255), 0.0);
///
/// // A flat face through the corner point: two triangles of area 0.5.
/// assert!((table.area(0b0000_1111) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SurfelAreaTable {
    areas: [f64; NEIGHBOUR_CODE_COUNT],
    spacing: Spacing,
}

impl SurfelAreaTable {
    /// Precomputes the areas of all codes for `spacing`.
    #[must_use]
    pub fn new(spacing: &Spacing) -> Self {
        let mut areas = [0.0; NEIGHBOUR_CODE_COUNT];
        for (code, area) in (0..=u8::MAX).zip(areas.iter_mut()) {
            *area = area_for_code(code, spacing);
        }
        Self {
            areas,
            spacing: *spacing,
        }
    }

    /// Area of the surfel for `code`.
    #[must_use]
    pub fn area(&self, code: u8) -> f64 {
        self.areas[usize::from(code)]
    }

    /// Spacing the table was built for.
    #[must_use]
    pub const fn spacing(&self) -> &Spacing {
        &self.spacing
    }

    /// All 256 areas, indexed by code.
    #[must_use]
    pub const fn as_array(&self) -> &[f64; NEIGHBOUR_CODE_COUNT] {
        &self.areas
    }
}

/// Surfel area in mm² for a single neighbour code.
///
/// Prefer [`SurfelAreaTable`] when looking up many codes at the same spacing.
#[must_use]
pub fn area_for_code(code: u8, spacing: &Spacing) -> f64 {
    let scale = spacing.face_areas();
    normals_for_code(code)
        .iter()
        .map(|n| Vector3::from(*n).component_mul(&scale).norm())
        .sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_corner_unit_spacing() {
        // One corner cut off: right triangle with legs sqrt(0.5), area sqrt(3)/8.
        let spacing = Spacing::unit();
        assert_relative_eq!(area_for_code(1, &spacing), 3.0_f64.sqrt() / 8.0);
        assert_relative_eq!(area_for_code(128, &spacing), 3.0_f64.sqrt() / 8.0);
    }

    #[test]
    fn test_single_corner_anisotropic() {
        // (0.125, 0.125, 0.125) scaled by (1, 2, 2) has norm 0.375.
        let spacing = Spacing::new(2.0, 1.0, 1.0).unwrap();
        assert_relative_eq!(area_for_code(1, &spacing), 0.375);
    }

    #[test]
    fn test_flat_faces_follow_spacing() {
        let spacing = Spacing::new(2.0, 3.0, 5.0).unwrap();
        // Half-space split perpendicular to x0: face area s1 * s2.
        assert_relative_eq!(area_for_code(0b0000_1111, &spacing), 15.0);
        // Perpendicular to x1: s0 * s2.
        assert_relative_eq!(area_for_code(0b0011_0011, &spacing), 10.0);
        // Perpendicular to x2: s0 * s1.
        assert_relative_eq!(area_for_code(0b0101_0101, &spacing), 6.0);
    }

    #[test]
    fn test_table_matches_direct_computation() {
        let spacing = Spacing::new(0.7, 1.3, 2.1).unwrap();
        let table = SurfelAreaTable::new(&spacing);
        for code in 0..=u8::MAX {
            assert_relative_eq!(table.area(code), area_for_code(code, &spacing));
        }
        assert_eq!(table.spacing(), &spacing);
    }

    #[test]
    fn test_complement_has_equal_area() {
        let table = SurfelAreaTable::new(&Spacing::new(1.5, 0.5, 2.0).unwrap());
        for code in 0..=u8::MAX {
            assert_relative_eq!(table.area(code), table.area(!code), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_scaling_all_axes_scales_area_quadratically() {
        let unit = SurfelAreaTable::new(&Spacing::unit());
        let doubled = SurfelAreaTable::new(&Spacing::new(2.0, 2.0, 2.0).unwrap());
        for code in 0..=u8::MAX {
            assert_relative_eq!(doubled.area(code), 4.0 * unit.area(code), epsilon = 1e-12);
        }
    }
}

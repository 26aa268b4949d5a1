//! Physical voxel spacing.

use nalgebra::Vector3;

use crate::error::{VolumeError, VolumeResult};

/// Physical size of a voxel along each axis, in millimetres.
///
/// Every component is finite and strictly positive; the constructor
/// rejects anything else, so code holding a `Spacing` never has to
/// re-check it.
///
/// # Example
///
/// ```
/// use surface_types::Spacing;
///
/// let spacing = Spacing::new(2.0, 1.0, 1.0).unwrap();
/// assert_eq!(spacing.as_array(), [2.0, 1.0, 1.0]);
/// assert!((spacing.voxel_volume() - 2.0).abs() < 1e-12);
///
/// assert!(Spacing::new(0.0, 1.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[f64; 3]", into = "[f64; 3]"))]
pub struct Spacing([f64; 3]);

impl Spacing {
    /// Creates a spacing from its three components.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::InvalidSpacing`] for the first component that
    /// is zero, negative, NaN or infinite.
    pub fn new(x0: f64, x1: f64, x2: f64) -> VolumeResult<Self> {
        Self::from_array([x0, x1, x2])
    }

    /// Creates a spacing from an array.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::InvalidSpacing`] for the first invalid component.
    pub fn from_array(values: [f64; 3]) -> VolumeResult<Self> {
        for (axis, &value) in values.iter().enumerate() {
            if !(value.is_finite() && value > 0.0) {
                return Err(VolumeError::InvalidSpacing { axis, value });
            }
        }
        Ok(Self(values))
    }

    /// One millimetre along every axis.
    #[must_use]
    pub const fn unit() -> Self {
        Self([1.0, 1.0, 1.0])
    }

    /// Components as an array.
    #[must_use]
    pub const fn as_array(&self) -> [f64; 3] {
        self.0
    }

    /// Components as a vector.
    #[must_use]
    pub fn as_vector(&self) -> Vector3<f64> {
        Vector3::from(self.0)
    }

    /// Spacing along one axis.
    ///
    /// `axis` must be 0, 1 or 2.
    #[must_use]
    pub const fn axis(&self, axis: usize) -> f64 {
        self.0[axis]
    }

    /// Area of a voxel face perpendicular to each axis.
    ///
    /// Component `i` is the product of the two other spacings, which is the
    /// factor applied to the `i`-th component of a unit-cube surface normal.
    ///
    /// # Example
    ///
    /// ```
    /// use surface_types::Spacing;
    /// use nalgebra::Vector3;
    ///
    /// let spacing = Spacing::new(2.0, 3.0, 5.0).unwrap();
    /// assert_eq!(spacing.face_areas(), Vector3::new(15.0, 10.0, 6.0));
    /// ```
    #[must_use]
    pub fn face_areas(&self) -> Vector3<f64> {
        let [s0, s1, s2] = self.0;
        Vector3::new(s1 * s2, s0 * s2, s0 * s1)
    }

    /// Volume of one voxel in cubic millimetres.
    #[must_use]
    pub fn voxel_volume(&self) -> f64 {
        self.0.iter().product()
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self::unit()
    }
}

impl TryFrom<[f64; 3]> for Spacing {
    type Error = VolumeError;

    fn try_from(values: [f64; 3]) -> VolumeResult<Self> {
        Self::from_array(values)
    }
}

impl From<Spacing> for [f64; 3] {
    fn from(spacing: Spacing) -> Self {
        spacing.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(
            Spacing::new(1.0, 0.0, 1.0).unwrap_err(),
            VolumeError::InvalidSpacing {
                axis: 1,
                value: 0.0
            }
        );
        assert!(Spacing::new(1.0, 1.0, -0.5).is_err());
        assert!(Spacing::new(f64::NAN, 1.0, 1.0).is_err());
        assert!(Spacing::new(1.0, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_face_areas_anisotropic() {
        let spacing = Spacing::new(2.0, 1.0, 1.0).unwrap();
        let areas = spacing.face_areas();
        assert_relative_eq!(areas.x, 1.0);
        assert_relative_eq!(areas.y, 2.0);
        assert_relative_eq!(areas.z, 2.0);
    }

    #[test]
    fn test_accessors() {
        let spacing = Spacing::new(0.5, 0.75, 3.0).unwrap();
        assert_eq!(spacing.axis(0), 0.5);
        assert_eq!(spacing.axis(2), 3.0);
        assert_eq!(spacing.as_vector(), Vector3::new(0.5, 0.75, 3.0));
        assert_relative_eq!(spacing.voxel_volume(), 1.125);
        assert_eq!(Spacing::default(), Spacing::unit());
    }

    #[test]
    fn test_try_from_array() {
        let spacing = Spacing::try_from([1.0, 2.0, 3.0]).unwrap();
        let back: [f64; 3] = spacing.into();
        assert_eq!(back, [1.0, 2.0, 3.0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_validates() {
        let spacing: Spacing = serde_json::from_str("[2.0, 1.0, 1.0]").unwrap();
        assert_eq!(spacing.as_array(), [2.0, 1.0, 1.0]);
        assert!(serde_json::from_str::<Spacing>("[2.0, -1.0, 1.0]").is_err());
    }
}

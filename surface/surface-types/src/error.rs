//! Error types for volume construction and validation.

/// Result type alias for volume operations.
pub type VolumeResult<T> = Result<T, VolumeError>;

/// Errors that can occur while building or combining volumes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum VolumeError {
    /// The backing buffer does not match the declared dimensions.
    #[error("volume data has {found} elements but dimensions {dims:?} require {expected}")]
    DataLength {
        /// Declared dimensions.
        dims: [usize; 3],
        /// Number of elements implied by the dimensions.
        expected: usize,
        /// Number of elements supplied.
        found: usize,
    },

    /// Two volumes that must share a shape do not.
    #[error("shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch {
        /// Shape of the first volume.
        left: [usize; 3],
        /// Shape of the second volume.
        right: [usize; 3],
    },

    /// A spacing component is zero, negative or not finite.
    #[error("voxel spacing along axis {axis} must be finite and positive, got {value}")]
    InvalidSpacing {
        /// Offending axis (0, 1 or 2).
        axis: usize,
        /// Offending value.
        value: f64,
    },

    /// The element count overflows `usize`.
    #[error("volume dimensions {0:?} overflow the addressable size")]
    TooLarge([usize; 3]),
}

impl VolumeError {
    /// Create a shape mismatch error.
    #[must_use]
    pub const fn shape_mismatch(left: [usize; 3], right: [usize; 3]) -> Self {
        Self::ShapeMismatch { left, right }
    }
}

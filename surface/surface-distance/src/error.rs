//! Error types for surface distance computation.

use surface_types::VolumeError;
use thiserror::Error;

/// Result type alias for surface distance operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Errors that can occur while computing surface distances.
///
/// All of these are input-contract violations. An empty mask is not an
/// error: it yields empty distance lists instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    /// Ground-truth and prediction volumes differ in shape.
    #[error("ground truth shape {gt:?} does not match prediction shape {pred:?}")]
    ShapeMismatch {
        /// Ground-truth dimensions.
        gt: [usize; 3],
        /// Prediction dimensions.
        pred: [usize; 3],
    },

    /// Paired distance and area sequences differ in length.
    #[error("{direction}: {distances} distances but {areas} surfel areas")]
    LengthMismatch {
        /// Which direction was malformed.
        direction: &'static str,
        /// Number of distances.
        distances: usize,
        /// Number of areas.
        areas: usize,
    },

    /// Invalid volume or spacing.
    #[error(transparent)]
    Volume(#[from] VolumeError),
}

impl SurfaceError {
    /// Create a shape mismatch error.
    #[must_use]
    pub const fn shape_mismatch(gt: [usize; 3], pred: [usize; 3]) -> Self {
        Self::ShapeMismatch { gt, pred }
    }
}

//! Error types for segmentation evaluation.

use std::path::PathBuf;

use surface_distance::SurfaceError;
use surface_types::VolumeError;
use thiserror::Error;

/// Result type for evaluation operations.
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur while loading masks or evaluating cases.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Reading a file or directory failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File or directory being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not a readable NIfTI image.
    #[error("invalid NIfTI image {path}: {message}")]
    Nifti {
        /// Offending file.
        path: PathBuf,
        /// Decoder message.
        message: String,
    },

    /// The image is not a 3-D volume and no channel selects one.
    #[error("unsupported image shape {shape:?} in {path}")]
    UnsupportedShape {
        /// Offending file.
        path: PathBuf,
        /// Shape of the decoded image.
        shape: Vec<usize>,
    },

    /// The requested channel does not exist in a 4-D image.
    #[error("channel {channel} out of range for {channels} channels in {path}")]
    ChannelOutOfRange {
        /// Offending file.
        path: PathBuf,
        /// Requested channel.
        channel: usize,
        /// Number of channels in the image.
        channels: usize,
    },

    /// The image header carries a voxel size that is not a valid spacing.
    #[error("invalid voxel spacing in header of {path}: {source}")]
    HeaderSpacing {
        /// Offending file.
        path: PathBuf,
        /// Validation failure.
        source: VolumeError,
    },

    /// Surface metric computation failed.
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    /// Invalid volume or spacing.
    #[error(transparent)]
    Volume(#[from] VolumeError),
}

impl EvalError {
    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a NIfTI decoding error for `path`.
    pub fn nifti(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Nifti {
            path: path.into(),
            message: message.into(),
        }
    }
}

//! Parameters for segmentation evaluation.

use std::path::Path;

use surface_types::{Spacing, VolumeResult};

use crate::error::{EvalError, EvalResult};

/// Parameters controlling how each case is evaluated.
///
/// # Example
///
/// ```
/// use surface_eval::EvalParams;
///
/// // Spacing from the image headers, 1 mm tolerance, 95th percentile.
/// let params = EvalParams::default();
/// assert!(params.spacing_mm.is_none());
/// assert!((params.tolerance_mm - 1.0).abs() < 1e-10);
///
/// // Fixed 2x1x1 mm voxels, first prediction channel.
/// let reference = EvalParams::reference_protocol();
/// assert_eq!(reference.spacing_mm.unwrap().as_array(), [2.0, 1.0, 1.0]);
/// assert_eq!(reference.prediction_channel, Some(0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvalParams {
    /// Voxel spacing override in mm. `None` uses each image's header.
    pub spacing_mm: Option<Spacing>,

    /// Tolerance for surface overlap and surface Dice, in mm.
    pub tolerance_mm: f64,

    /// Percentile for the robust Hausdorff distance.
    pub robust_percent: f64,

    /// Restrict the prediction to the ground truth (`pred AND gt`) before
    /// scoring.
    pub apply_overlap: bool,

    /// Channel to select from 4-D prediction images.
    pub prediction_channel: Option<usize>,

    /// File name suffix identifying ground-truth masks.
    pub gt_suffix: String,
}

impl Default for EvalParams {
    fn default() -> Self {
        Self {
            spacing_mm: None,
            tolerance_mm: 1.0,
            robust_percent: 95.0,
            apply_overlap: false,
            prediction_channel: None,
            gt_suffix: String::from("_seg.nii.gz"),
        }
    }
}

impl EvalParams {
    /// Fixed 2x1x1 mm spacing and channel 0 of 4-D predictions.
    #[must_use]
    pub fn reference_protocol() -> Self {
        Self {
            spacing_mm: Spacing::new(2.0, 1.0, 1.0).ok(),
            prediction_channel: Some(0),
            ..Self::default()
        }
    }

    /// Set the spacing override.
    #[must_use]
    pub const fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing_mm = Some(spacing);
        self
    }

    /// Set the surface tolerance.
    #[must_use]
    pub const fn tolerance(mut self, tolerance_mm: f64) -> Self {
        self.tolerance_mm = tolerance_mm;
        self
    }

    /// Set the robust Hausdorff percentile.
    #[must_use]
    pub const fn robust_percent(mut self, percent: f64) -> Self {
        self.robust_percent = percent;
        self
    }

    /// Enable or disable overlap post-processing.
    #[must_use]
    pub const fn apply_overlap(mut self, apply: bool) -> Self {
        self.apply_overlap = apply;
        self
    }

    /// Select a channel of 4-D prediction images.
    #[must_use]
    pub const fn prediction_channel(mut self, channel: usize) -> Self {
        self.prediction_channel = Some(channel);
        self
    }

    /// Set the ground-truth file suffix.
    #[must_use]
    pub fn gt_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.gt_suffix = suffix.into();
        self
    }

    /// Spacing to use for a case: the override if set, else the spacing
    /// read from the header of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::HeaderSpacing`] if there is no override and the
    /// header spacing is invalid.
    pub fn resolve_spacing(
        &self,
        path: &Path,
        header: VolumeResult<Spacing>,
    ) -> EvalResult<Spacing> {
        match self.spacing_mm {
            Some(spacing) => Ok(spacing),
            None => header.map_err(|source| EvalError::HeaderSpacing {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

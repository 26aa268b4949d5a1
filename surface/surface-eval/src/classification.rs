//! Voxel-wise classification metrics.
//!
//! Treats every voxel as one binary sample, ground truth as label and the
//! prediction as a hard score. Counts accumulate across cases.

use surface_types::Volume;

use crate::error::EvalResult;

/// Voxel counts of the four prediction outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfusionMatrix {
    /// Background predicted as background.
    pub true_negatives: u64,
    /// Background predicted as foreground.
    pub false_positives: u64,
    /// Foreground predicted as background.
    pub false_negatives: u64,
    /// Foreground predicted as foreground.
    pub true_positives: u64,
}

#[allow(clippy::cast_precision_loss)]
fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        f64::NAN
    } else {
        numerator as f64 / denominator as f64
    }
}

impl ConfusionMatrix {
    /// Counts outcomes over two masks of the same shape.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EvalError::Volume`] if the shapes differ.
    ///
    /// # Example
    ///
    /// ```
    /// use surface_eval::ConfusionMatrix;
    /// use surface_types::Volume;
    ///
    /// let gt = Volume::new([1, 1, 4], vec![true, true, false, false]).unwrap();
    /// let pred = Volume::new([1, 1, 4], vec![true, false, true, false]).unwrap();
    ///
    /// let cm = ConfusionMatrix::from_masks(&gt, &pred).unwrap();
    /// assert_eq!(cm.true_positives, 1);
    /// assert_eq!(cm.false_negatives, 1);
    /// assert!((cm.sensitivity() - 0.5).abs() < 1e-12);
    /// ```
    pub fn from_masks(gt: &Volume<bool>, pred: &Volume<bool>) -> EvalResult<Self> {
        let mut matrix = Self::default();
        matrix.accumulate(gt, pred)?;
        Ok(matrix)
    }

    /// Adds the outcomes of another pair of masks.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EvalError::Volume`] if the shapes differ; the counts
    /// are left unchanged.
    pub fn accumulate(&mut self, gt: &Volume<bool>, pred: &Volume<bool>) -> EvalResult<()> {
        gt.ensure_same_shape(pred)?;
        for (&label, &predicted) in gt.iter().zip(pred.iter()) {
            match (label, predicted) {
                (false, false) => self.true_negatives += 1,
                (false, true) => self.false_positives += 1,
                (true, false) => self.false_negatives += 1,
                (true, true) => self.true_positives += 1,
            }
        }
        Ok(())
    }

    /// Sum of two matrices.
    #[must_use]
    pub const fn merged(self, other: Self) -> Self {
        Self {
            true_negatives: self.true_negatives + other.true_negatives,
            false_positives: self.false_positives + other.false_positives,
            false_negatives: self.false_negatives + other.false_negatives,
            true_positives: self.true_positives + other.true_positives,
        }
    }

    /// Total number of voxels counted.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.true_negatives + self.false_positives + self.false_negatives + self.true_positives
    }

    /// Foreground voxels in the ground truth.
    #[must_use]
    pub const fn positives(&self) -> u64 {
        self.true_positives + self.false_negatives
    }

    /// Background voxels in the ground truth.
    #[must_use]
    pub const fn negatives(&self) -> u64 {
        self.true_negatives + self.false_positives
    }

    /// `TP / (TP + FN)`, the true positive rate.
    #[must_use]
    pub fn sensitivity(&self) -> f64 {
        ratio(self.true_positives, self.positives())
    }

    /// `TN / (TN + FP)`, the true negative rate.
    #[must_use]
    pub fn specificity(&self) -> f64 {
        ratio(self.true_negatives, self.negatives())
    }

    /// `TP / (TP + FP)`.
    #[must_use]
    pub fn precision(&self) -> f64 {
        ratio(
            self.true_positives,
            self.true_positives + self.false_positives,
        )
    }

    /// `2TP / (2TP + FP + FN)`.
    #[must_use]
    pub fn f1(&self) -> f64 {
        ratio(
            2 * self.true_positives,
            2 * self.true_positives + self.false_positives + self.false_negatives,
        )
    }

    /// `FP / (FP + TN)`.
    #[must_use]
    pub fn false_positive_rate(&self) -> f64 {
        ratio(self.false_positives, self.negatives())
    }

    /// ROC curve of the hard predictor.
    #[must_use]
    pub fn roc_curve(&self) -> RocCurve {
        RocCurve::from_confusion(self)
    }
}

/// Receiver operating characteristic of a binary predictor.
///
/// A hard 0/1 prediction has three operating points: nothing positive
/// (threshold `+inf`), the prediction itself (threshold 1) and everything
/// positive (threshold 0).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RocCurve {
    /// False positive rate at each threshold.
    pub fpr: Vec<f64>,
    /// True positive rate at each threshold.
    pub tpr: Vec<f64>,
    /// Decision thresholds, decreasing.
    pub thresholds: Vec<f64>,
}

impl RocCurve {
    /// Builds the curve from voxel counts. Rates are NaN when the ground
    /// truth lacks positives or negatives.
    #[must_use]
    pub fn from_confusion(matrix: &ConfusionMatrix) -> Self {
        let fpr = matrix.false_positive_rate();
        let tpr = matrix.sensitivity();
        let full_fpr = ratio(matrix.negatives(), matrix.negatives());
        let full_tpr = ratio(matrix.positives(), matrix.positives());
        Self {
            fpr: vec![0.0, fpr, full_fpr],
            tpr: vec![0.0, tpr, full_tpr],
            thresholds: vec![f64::INFINITY, 1.0, 0.0],
        }
    }

    /// Area under the curve by the trapezoidal rule.
    #[must_use]
    pub fn auc(&self) -> f64 {
        self.fpr
            .windows(2)
            .zip(self.tpr.windows(2))
            .map(|(x, y)| (x[1] - x[0]) * (y[0] + y[1]) / 2.0)
            .sum()
    }
}

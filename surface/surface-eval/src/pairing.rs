//! Pairing ground-truth and prediction files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{EvalError, EvalResult};

/// One ground-truth file and the prediction it is scored against.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CasePair {
    /// Ground-truth mask.
    pub gt: PathBuf,
    /// Predicted mask.
    pub pred: PathBuf,
}

impl CasePair {
    /// Case name: the ground-truth file name without `gt_suffix`.
    #[must_use]
    pub fn name(&self, gt_suffix: &str) -> String {
        let file_name = self
            .gt
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        file_name
            .strip_suffix(gt_suffix)
            .filter(|stem| !stem.is_empty())
            .map_or_else(|| file_name.clone(), str::to_owned)
    }
}

/// File entries of `dir`, sorted by file name.
fn sorted_files(dir: &Path) -> EvalResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| EvalError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| EvalError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        } else {
            debug!(path = %path.display(), "skipping non-file entry");
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Pairs ground-truth and prediction files by sorted position.
///
/// Ground-truth files are the entries of `gt_dir` whose name ends with
/// `gt_suffix`; predictions are all files of `pred_dir`. Both lists are
/// sorted by file name and paired in order. If the counts differ, a warning
/// is logged and the extra files of the longer list are ignored.
///
/// # Errors
///
/// Returns [`EvalError::Io`] if either directory cannot be listed.
pub fn pair_cases(gt_dir: &Path, pred_dir: &Path, gt_suffix: &str) -> EvalResult<Vec<CasePair>> {
    let gt_files: Vec<PathBuf> = sorted_files(gt_dir)?
        .into_iter()
        .filter(|path| {
            path.file_name()
                .is_some_and(|name| name.to_string_lossy().ends_with(gt_suffix))
        })
        .collect();
    let pred_files = sorted_files(pred_dir)?;

    if gt_files.len() != pred_files.len() {
        warn!(
            gt = gt_files.len(),
            pred = pred_files.len(),
            "ground truth and prediction counts differ, extra files are ignored"
        );
    }

    Ok(gt_files
        .into_iter()
        .zip(pred_files)
        .map(|(gt, pred)| CasePair { gt, pred })
        .collect())
}

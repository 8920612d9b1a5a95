//! Classification metrics for a single decision cutoff.
//!
//! [`sensitivity`] and [`specificity`] score a cutoff against the positive
//! and negative control populations. Both use the same inclusive comparison:
//! a reading `>= cutoff` tests positive. The inclusive side of the boundary
//! fixes the monotonicity direction the cutoff sweep and ROC curve depend
//! on, so it must not drift between the two functions.

use serodx_core::{Result, SerodxError};

/// Sensitivity (true positive rate) of the assay at `cutoff`.
///
/// Positive-control readings `>= cutoff` count as true positives, the rest
/// as false negatives: `se = TP / (TP + FN)`. Always in `[0, 1]`.
pub fn sensitivity(positive_controls: &[f64], cutoff: f64) -> Result<f64> {
    if positive_controls.is_empty() {
        return Err(SerodxError::InvalidInput(
            "sensitivity: positive-control population is empty".into(),
        ));
    }

    let true_positives = positive_controls.iter().filter(|&&v| v >= cutoff).count();
    Ok(true_positives as f64 / positive_controls.len() as f64)
}

/// Specificity (true negative rate) of the assay at `cutoff`.
///
/// Negative-control readings `< cutoff` count as true negatives, the rest
/// as false positives: `sp = TN / (TN + FP)`. Always in `[0, 1]`.
pub fn specificity(negative_controls: &[f64], cutoff: f64) -> Result<f64> {
    if negative_controls.is_empty() {
        return Err(SerodxError::InvalidInput(
            "specificity: negative-control population is empty".into(),
        ));
    }

    let true_negatives = negative_controls.iter().filter(|&&v| v < cutoff).count();
    Ok(true_negatives as f64 / negative_controls.len() as f64)
}

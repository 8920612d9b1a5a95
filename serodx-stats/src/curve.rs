//! Per-cutoff curve data for reporting consumers.
//!
//! [`roc_points`] and [`prevalence_curve`] evaluate every cutoff in the
//! standard sweep and hand back plain data, leaving all rendering (ROC
//! plots, prevalence-vs-cutoff plots) to whatever reporting layer sits on
//! top.

use serodx_core::{Result, Summarizable};

use crate::metrics::{sensitivity, specificity};
use crate::prevalence::{prevalence_at, PrevalenceEstimate};
use crate::sweep::{cutoff_sweep, global_max};

/// Classification performance at one cutoff: a point on the ROC curve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CutoffMetrics {
    /// The evaluated cutoff.
    pub cutoff: f64,
    /// True positive rate at this cutoff.
    pub sensitivity: f64,
    /// True negative rate at this cutoff.
    pub specificity: f64,
}

impl CutoffMetrics {
    /// False positive rate, the ROC x-coordinate: `1 - sp`.
    pub fn false_positive_rate(&self) -> f64 {
        1.0 - self.specificity
    }
}

impl Summarizable for CutoffMetrics {
    fn summary(&self) -> String {
        format!(
            "cutoff={:.4}: se={:.4}, sp={:.4}",
            self.cutoff, self.sensitivity, self.specificity,
        )
    }
}

/// Sensitivity and specificity at every cutoff in the sweep over
/// `[0, global max]`.
///
/// The sample population does not enter the rates; it only widens the sweep
/// bound so the ROC curve spans every observed reading.
///
/// # Errors
///
/// Returns an error if any population is empty or `step` is not a positive
/// number.
pub fn roc_points(
    negative_controls: &[f64],
    positive_controls: &[f64],
    sample: &[f64],
    step: f64,
) -> Result<Vec<CutoffMetrics>> {
    let max = global_max(negative_controls, positive_controls, sample)?;
    let cutoffs = cutoff_sweep(0.0, step, max)?;

    cutoffs
        .into_iter()
        .map(|cutoff| {
            Ok(CutoffMetrics {
                cutoff,
                sensitivity: sensitivity(positive_controls, cutoff)?,
                specificity: specificity(negative_controls, cutoff)?,
            })
        })
        .collect()
}

/// Raw and corrected prevalence at every cutoff in the sweep over
/// `[0, global max]`.
///
/// # Errors
///
/// Returns an error if any population is empty or `step` is not a positive
/// number.
pub fn prevalence_curve(
    negative_controls: &[f64],
    positive_controls: &[f64],
    sample: &[f64],
    step: f64,
) -> Result<Vec<PrevalenceEstimate>> {
    let max = global_max(negative_controls, positive_controls, sample)?;
    let cutoffs = cutoff_sweep(0.0, step, max)?;

    cutoffs
        .into_iter()
        .map(|cutoff| prevalence_at(negative_controls, positive_controls, sample, cutoff))
        .collect()
}

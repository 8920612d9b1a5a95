//! Prevalence estimation, raw and corrected for assay imperfection.
//!
//! [`raw_prevalence`] is the observed positive fraction of the sample;
//! [`corrected_prevalence`] applies the Rogan-Gladen estimator
//! `theta = (phi - (1 - sp)) / (se + sp - 1)` to adjust for imperfect
//! sensitivity and specificity. The correction is singular where
//! `se + sp == 1` (Youden's J is zero, the assay has no discriminating
//! power at that cutoff); that case is reported as `None`, never as a
//! numeric sentinel. A corrected value outside `[0, 1]` is a valid output
//! and is returned as-is.

use serodx_core::{Result, SerodxError, Summarizable};

use crate::metrics::{sensitivity, specificity};

/// Raw and corrected prevalence at one cutoff.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrevalenceEstimate {
    /// Cutoff the estimate was computed at.
    pub cutoff: f64,
    /// Observed fraction of the sample testing positive (phi).
    pub raw: f64,
    /// Rogan-Gladen corrected prevalence (theta); `None` where the
    /// correction is singular.
    pub corrected: Option<f64>,
}

impl Summarizable for PrevalenceEstimate {
    fn summary(&self) -> String {
        match self.corrected {
            Some(theta) => format!(
                "cutoff={:.4}: phi={:.4}, theta={:.4}",
                self.cutoff, self.raw, theta,
            ),
            None => format!(
                "cutoff={:.4}: phi={:.4}, theta undefined",
                self.cutoff, self.raw,
            ),
        }
    }
}

/// Observed fraction of `sample` readings testing positive (`>= cutoff`).
///
/// # Errors
///
/// Returns an error if the sample population is empty.
pub fn raw_prevalence(sample: &[f64], cutoff: f64) -> Result<f64> {
    if sample.is_empty() {
        return Err(SerodxError::InvalidInput(
            "raw_prevalence: sample population is empty".into(),
        ));
    }

    let positives = sample.iter().filter(|&&v| v >= cutoff).count();
    Ok(positives as f64 / sample.len() as f64)
}

/// Rogan-Gladen corrected prevalence at `cutoff`.
///
/// Returns `Ok(None)` exactly when `se + sp - 1 == 0`, where the estimator
/// has no solution.
///
/// # Errors
///
/// Returns an error if any of the three populations is empty.
pub fn corrected_prevalence(
    negative_controls: &[f64],
    positive_controls: &[f64],
    sample: &[f64],
    cutoff: f64,
) -> Result<Option<f64>> {
    let phi = raw_prevalence(sample, cutoff)?;
    let se = sensitivity(positive_controls, cutoff)?;
    let sp = specificity(negative_controls, cutoff)?;

    let denominator = se + sp - 1.0;
    if denominator == 0.0 {
        return Ok(None);
    }
    Ok(Some((phi - (1.0 - sp)) / denominator))
}

/// Bundle raw and corrected prevalence at `cutoff` into a
/// [`PrevalenceEstimate`].
pub fn prevalence_at(
    negative_controls: &[f64],
    positive_controls: &[f64],
    sample: &[f64],
    cutoff: f64,
) -> Result<PrevalenceEstimate> {
    let raw = raw_prevalence(sample, cutoff)?;
    let corrected = corrected_prevalence(negative_controls, positive_controls, sample, cutoff)?;

    Ok(PrevalenceEstimate {
        cutoff,
        raw,
        corrected,
    })
}

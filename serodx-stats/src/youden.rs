//! Optimal cutoff selection via Youden's J statistic.
//!
//! Sweeps candidate cutoffs over `[0, global max]` and keeps the one
//! maximizing `J = se + sp - 1`, the cutoff balancing the two error rates.

use serodx_core::{Result, Scored, SerodxError, Summarizable};

use crate::metrics::{sensitivity, specificity};
use crate::sweep::{cutoff_sweep, global_max};

/// The selected cutoff together with its diagnostic performance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YoudenResult {
    /// Chosen decision cutoff.
    pub cutoff: f64,
    /// Sensitivity at the chosen cutoff.
    pub sensitivity: f64,
    /// Specificity at the chosen cutoff.
    pub specificity: f64,
    /// Youden's J at the chosen cutoff, in `[-1, 1]`.
    pub j: f64,
}

impl Scored for YoudenResult {
    fn score(&self) -> f64 {
        self.j
    }
}

impl Summarizable for YoudenResult {
    fn summary(&self) -> String {
        format!(
            "cutoff={:.4}: se={:.4}, sp={:.4}, J={:.4}",
            self.cutoff, self.sensitivity, self.specificity, self.j,
        )
    }
}

/// Find the cutoff maximizing Youden's J over a sweep of `[0, global max]`
/// with the given `step`.
///
/// The scan replaces the incumbent only on a strictly greater J, so among
/// tied maximizers the lowest cutoff wins. Deterministic: identical inputs
/// always select the identical cutoff.
///
/// # Errors
///
/// Returns an error if any population is empty or `step` is not a positive
/// number.
pub fn find_optimal_cutoff(
    negative_controls: &[f64],
    positive_controls: &[f64],
    sample: &[f64],
    step: f64,
) -> Result<YoudenResult> {
    let max = global_max(negative_controls, positive_controls, sample)?;
    let cutoffs = cutoff_sweep(0.0, step, max)?;

    let mut best: Option<YoudenResult> = None;
    for cutoff in cutoffs {
        let se = sensitivity(positive_controls, cutoff)?;
        let sp = specificity(negative_controls, cutoff)?;
        let j = se + sp - 1.0;

        if best.as_ref().is_none_or(|b| j > b.j) {
            best = Some(YoudenResult {
                cutoff,
                sensitivity: se,
                specificity: sp,
                j,
            });
        }
    }

    // The sweep always contains at least the appended maximum.
    best.ok_or_else(|| SerodxError::Other("find_optimal_cutoff: empty cutoff sweep".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    const NEG: [f64; 4] = [1.0, 1.0, 1.0, 2.0];
    const POS: [f64; 4] = [5.0, 6.0, 7.0, 8.0];
    const SAMPLE: [f64; 4] = [1.0, 2.0, 6.0, 7.0];

    #[test]
    fn separable_controls_reach_perfect_j() {
        // Cutoffs 3, 4, 5 all separate the controls perfectly; the first
        // one in sweep order wins.
        let best = find_optimal_cutoff(&NEG, &POS, &SAMPLE, 1.0).unwrap();
        assert!((best.cutoff - 3.0).abs() < TOL);
        assert!((best.sensitivity - 1.0).abs() < TOL);
        assert!((best.specificity - 1.0).abs() < TOL);
        assert!((best.j - 1.0).abs() < TOL);
    }

    #[test]
    fn fractional_step_still_lands_in_separating_gap() {
        let best = find_optimal_cutoff(&NEG, &POS, &SAMPLE, 0.25).unwrap();
        assert!((best.j - 1.0).abs() < TOL);
        assert!(best.cutoff > 2.0 && best.cutoff <= 5.0);
    }

    #[test]
    fn ties_keep_lowest_cutoff() {
        // Fully overlapping controls: J = 0 at every cutoff, so the first
        // sweep element (cutoff 0) is kept.
        let ctrl = [1.0, 2.0];
        let best = find_optimal_cutoff(&ctrl, &ctrl, &ctrl, 1.0).unwrap();
        assert!((best.cutoff - 0.0).abs() < TOL);
        assert!((best.j - 0.0).abs() < TOL);
    }

    #[test]
    fn idempotent() {
        let first = find_optimal_cutoff(&NEG, &POS, &SAMPLE, 0.25).unwrap();
        let second = find_optimal_cutoff(&NEG, &POS, &SAMPLE, 0.25).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn j_within_bounds() {
        // Inverted assay (positives read lower than negatives) drives J
        // negative but never below -1.
        let best = find_optimal_cutoff(&POS, &NEG, &SAMPLE, 0.5).unwrap();
        assert!(best.j >= -1.0 && best.j <= 1.0);
    }

    #[test]
    fn propagates_empty_population() {
        assert!(find_optimal_cutoff(&[], &POS, &SAMPLE, 1.0).is_err());
        assert!(find_optimal_cutoff(&NEG, &[], &SAMPLE, 1.0).is_err());
        assert!(find_optimal_cutoff(&NEG, &POS, &[], 1.0).is_err());
    }

    #[test]
    fn rejects_non_positive_step() {
        assert!(find_optimal_cutoff(&NEG, &POS, &SAMPLE, 0.0).is_err());
    }

    #[test]
    fn scored_exposes_j() {
        let best = find_optimal_cutoff(&NEG, &POS, &SAMPLE, 1.0).unwrap();
        assert!((best.score() - best.j).abs() < TOL);
    }
}

//! Diagnostic assay evaluation for the serodx workspace.
//!
//! Given readings for known-negative controls, known-positive controls, and
//! an unknown sample population, this crate selects a decision cutoff and
//! scores its diagnostic performance:
//!
//! - **Classification metrics** — [`sensitivity`] and [`specificity`] of a
//!   cutoff against control populations
//! - **Cutoff sweeps** — [`cutoff_sweep`] candidate generation over
//!   `[0, global max]`
//! - **Prevalence** — raw and Rogan-Gladen corrected estimates
//!   ([`raw_prevalence`], [`corrected_prevalence`])
//! - **Cutoff selection** — [`find_optimal_cutoff`] via Youden's J statistic
//! - **Curve data** — [`roc_points`] and [`prevalence_curve`] for reporting
//!   consumers
//!
//! Everywhere in this crate a reading tests positive when it is `>= cutoff`.

pub mod curve;
pub mod metrics;
pub mod prevalence;
pub mod sweep;
pub mod youden;

pub use curve::{prevalence_curve, roc_points, CutoffMetrics};
pub use metrics::{sensitivity, specificity};
pub use prevalence::{corrected_prevalence, prevalence_at, raw_prevalence, PrevalenceEstimate};
pub use sweep::{cutoff_sweep, global_max};
pub use youden::{find_optimal_cutoff, YoudenResult};

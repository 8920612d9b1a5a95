//! Candidate cutoff generation.
//!
//! [`cutoff_sweep`] produces the ordered cutoffs the optimizer and curve
//! builders evaluate; [`global_max`] bounds the sweep by the largest reading
//! observed anywhere in the study.

use serodx_core::{Result, SerodxError};

/// Arithmetic progression of cutoffs from `start` to `max`, inclusive of
/// `max`.
///
/// Values `start, start + step, …` are emitted while they do not exceed
/// `max`, then `max` itself is appended as the final element. The appended
/// maximum guarantees the sweep covers the largest observed reading even
/// when `step` does not divide the span evenly; when it does, the final two
/// elements repeat the same value. Downstream consumers rely on this
/// trailing `max`, so it is kept even in the duplicate case.
///
/// # Errors
///
/// Returns an error unless `step` is a positive number — a non-positive
/// step would never reach `max`.
pub fn cutoff_sweep(start: f64, step: f64, max: f64) -> Result<Vec<f64>> {
    if !(step > 0.0) {
        return Err(SerodxError::InvalidInput(
            "cutoff_sweep: step must be a positive number".into(),
        ));
    }

    let mut cutoffs = Vec::new();
    let mut c = start;
    while c <= max {
        cutoffs.push(c);
        c += step;
    }
    cutoffs.push(max);
    Ok(cutoffs)
}

/// Largest reading across the three study populations.
///
/// # Errors
///
/// Returns an error if any population is empty.
pub fn global_max(
    negative_controls: &[f64],
    positive_controls: &[f64],
    sample: &[f64],
) -> Result<f64> {
    if negative_controls.is_empty() || positive_controls.is_empty() || sample.is_empty() {
        return Err(SerodxError::InvalidInput(
            "global_max: every population needs at least one reading".into(),
        ));
    }

    let mut max = f64::NEG_INFINITY;
    for &v in negative_controls
        .iter()
        .chain(positive_controls)
        .chain(sample)
    {
        if v > max {
            max = v;
        }
    }
    Ok(max)
}

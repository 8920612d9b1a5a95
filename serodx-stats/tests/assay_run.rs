//! End-to-end assay evaluation: measurement files in, cutoff and curves out.

use std::io::Write;

use tempfile::NamedTempFile;

use serodx_io::StudyData;
use serodx_stats::{find_optimal_cutoff, prevalence_at, prevalence_curve, roc_points};

const TOL: f64 = 1e-10;

fn write_column(values: &[f64]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for v in values {
        writeln!(file, "{v}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn full_run_on_separable_study() {
    let neg = write_column(&[1.0, 1.0, 1.0, 2.0]);
    let pos = write_column(&[5.0, 6.0, 7.0, 8.0]);
    let sample = write_column(&[1.0, 2.0, 6.0, 7.0]);

    let study = StudyData::from_files(neg.path(), pos.path(), sample.path()).unwrap();

    let best = find_optimal_cutoff(
        &study.negative_controls,
        &study.positive_controls,
        &study.sample,
        0.25,
    )
    .unwrap();
    assert!((best.j - 1.0).abs() < TOL);
    assert!(best.cutoff > 2.0 && best.cutoff <= 5.0);

    // Half the sample sits above the separating gap; with a perfect assay
    // at the chosen cutoff the corrected estimate equals the raw one.
    let prevalence = prevalence_at(
        &study.negative_controls,
        &study.positive_controls,
        &study.sample,
        best.cutoff,
    )
    .unwrap();
    assert!((prevalence.raw - 0.5).abs() < TOL);
    assert!((prevalence.corrected.unwrap() - 0.5).abs() < TOL);

    // Curve data spans the full sweep up to the global maximum reading.
    let roc = roc_points(
        &study.negative_controls,
        &study.positive_controls,
        &study.sample,
        0.25,
    )
    .unwrap();
    assert!((roc.last().unwrap().cutoff - 8.0).abs() < TOL);
    assert!((roc[0].false_positive_rate() - 1.0).abs() < TOL);

    let theta_curve = prevalence_curve(
        &study.negative_controls,
        &study.positive_controls,
        &study.sample,
        0.25,
    )
    .unwrap();
    assert_eq!(theta_curve.len(), roc.len());
}

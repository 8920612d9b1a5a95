//! Single-column measurement files.

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use serodx_core::{Result, SerodxError, Summarizable};

/// Read a single-column file of assay readings, one float per line.
///
/// The file is treated as headerless; blank lines are skipped. An empty
/// file yields an empty vector — the statistical routines that require a
/// non-empty population enforce that themselves.
pub fn read_measurements(path: impl AsRef<Path>) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        SerodxError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    let mut reader = ReaderBuilder::new().has_headers(false).from_reader(file);

    let mut readings = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            SerodxError::Parse(format!("{}: {}", path.display(), e))
        })?;
        let field = record.get(0).unwrap_or("");
        let value: f64 = field.trim().parse().map_err(|_| {
            SerodxError::Parse(format!(
                "{}: line {}: not a number: {:?}",
                path.display(),
                line + 1,
                field,
            ))
        })?;
        readings.push(value);
    }

    Ok(readings)
}

/// The three measurement populations of one assay-evaluation run.
#[derive(Debug, Clone)]
pub struct StudyData {
    /// Readings from known-negative control specimens.
    pub negative_controls: Vec<f64>,
    /// Readings from known-positive control specimens.
    pub positive_controls: Vec<f64>,
    /// Readings from the unknown sample population.
    pub sample: Vec<f64>,
}

impl StudyData {
    /// Load the three populations from single-column files.
    pub fn from_files(
        negative_controls: impl AsRef<Path>,
        positive_controls: impl AsRef<Path>,
        sample: impl AsRef<Path>,
    ) -> Result<Self> {
        Ok(Self {
            negative_controls: read_measurements(negative_controls)?,
            positive_controls: read_measurements(positive_controls)?,
            sample: read_measurements(sample)?,
        })
    }
}

impl Summarizable for StudyData {
    fn summary(&self) -> String {
        format!(
            "negatives={}, positives={}, sample={}",
            self.negative_controls.len(),
            self.positive_controls.len(),
            self.sample.len(),
        )
    }
}

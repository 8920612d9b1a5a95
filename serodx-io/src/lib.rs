//! Measurement file input for the serodx workspace.
//!
//! Assay readings arrive as single-column text files, one float per line.
//! [`read_measurements`] loads one file; [`StudyData`] bundles the three
//! populations of a study (negative controls, positive controls, unknown
//! sample).

pub mod measurements;

pub use measurements::{read_measurements, StudyData};

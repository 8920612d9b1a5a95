//! Shared primitives for the serodx assay-evaluation workspace.
//!
//! `serodx-core` provides the foundation the other serodx crates build on:
//!
//! - **Error types** — [`SerodxError`] and [`Result`] for structured error
//!   handling
//! - **Traits** — [`Scored`] and [`Summarizable`] contracts for result types

pub mod error;
pub mod traits;

pub use error::{Result, SerodxError};
pub use traits::*;

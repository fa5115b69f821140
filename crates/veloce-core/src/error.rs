// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types shared across the veloce crates.
//!
//! Every failure is fatal to the whole batch: there is no per-file or
//! per-folder recovery anywhere in the pipeline, so errors propagate
//! straight up to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the veloce crates.
pub type Result<T> = std::result::Result<T, VeloceError>;

/// Unified error type for extraction, rendering, and persistence.
#[derive(Debug, Error)]
pub enum VeloceError {
    /// An I/O operation failed; the path gives the file or folder involved.
    #[error("i/o error on {path}: {source}")]
    Io {
        /// File or directory the operation was touching.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader reported a structural or parse failure.
    #[error("csv error in {path}: {source}")]
    Csv {
        /// Sample file being read.
        path: PathBuf,
        /// Underlying csv crate error.
        #[source]
        source: csv::Error,
    },

    /// A configured metric column is absent from a sample file's header.
    #[error("metric column '{column}' not found in {path}")]
    MissingColumn {
        /// Name of the metric column that was expected.
        column: String,
        /// Sample file whose header lacks it.
        path: PathBuf,
    },

    /// A sample field could not be parsed as a float.
    #[error("bad sample value '{value}' for column '{column}' in {path}")]
    BadSample {
        /// The raw field text.
        value: String,
        /// Column the field belongs to.
        column: String,
        /// Sample file containing the field.
        path: PathBuf,
    },

    /// A file or folder name does not conform to the run naming scheme.
    #[error("name '{name}' does not match the {kind} pattern")]
    BadName {
        /// The offending name.
        name: String,
        /// Which pattern was expected ("folder" or "run file").
        kind: &'static str,
    },

    /// Speedup was requested but the folder has no NTH-00 serial file.
    ///
    /// Only raised when the baseline is first referenced; a folder whose
    /// metrics carry no speedup flag never notices the absence.
    #[error("no serial (NTH-00) baseline found in folder '{folder}'")]
    MissingBaseline {
        /// Folder whose baseline is absent.
        folder: String,
    },

    /// Persistence was requested without a destination filename.
    #[error("no filename to save {artifact}")]
    NoFilename {
        /// What was being persisted ("table" or "plot").
        artifact: &'static str,
    },

    /// A column the plot renderer needs is not in the table header.
    #[error("column '{column}' not present in table header")]
    MissingPlotColumn {
        /// Header entry that could not be located.
        column: String,
    },

    /// The plotting backend failed while drawing or writing an image.
    #[error("plot rendering failed: {0}")]
    Plot(String),
}

impl VeloceError {
    /// Wrap an I/O error with the path it occurred on.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

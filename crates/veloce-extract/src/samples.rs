// SPDX-License-Identifier: MIT OR Apache-2.0
//! Sample file loading.
//!
//! Each sample file is a headed CSV: one column per metric, one row per
//! independent trial. Loading is strict — a configured metric missing from
//! the header or a field that fails to parse aborts the whole batch.

use std::collections::HashMap;
use std::path::Path;

use veloce_core::stats::trimmed_mean;
use veloce_core::{MetricConfig, Result, VeloceError};

/// Raw sample columns for one file, keyed by metric name.
pub type SampleColumns = HashMap<String, Vec<f64>>;

/// Trimmed per-metric results for one file: `(mean, kept samples)`.
pub type FileMeans = HashMap<String, (f64, Vec<f64>)>;

/// Load the configured metric columns from a sample CSV.
///
/// # Errors
/// - [`VeloceError::Csv`] on read or parse failure of the file itself
/// - [`VeloceError::MissingColumn`] when a configured metric is absent
/// - [`VeloceError::BadSample`] when a field is not a float
pub fn load_columns(path: &Path, config: &MetricConfig) -> Result<SampleColumns> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| VeloceError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    let headers = reader
        .headers()
        .map_err(|source| VeloceError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    let mut indices = Vec::with_capacity(config.len());
    for (name, _) in config.iter() {
        let idx = headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| VeloceError::MissingColumn {
                column: name.to_string(),
                path: path.to_path_buf(),
            })?;
        indices.push((name.to_string(), idx));
    }

    let mut columns: SampleColumns = indices
        .iter()
        .map(|(name, _)| (name.clone(), Vec::new()))
        .collect();
    for record in reader.records() {
        let record = record.map_err(|source| VeloceError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        for (name, idx) in &indices {
            let field = record.get(*idx).unwrap_or("").trim();
            let value: f64 = field.parse().map_err(|_| VeloceError::BadSample {
                value: field.to_string(),
                column: name.clone(),
                path: path.to_path_buf(),
            })?;
            if let Some(column) = columns.get_mut(name) {
                column.push(value);
            }
        }
    }
    Ok(columns)
}

/// Load a sample file and reduce every configured metric to its trimmed mean.
///
/// # Errors
/// Propagates every failure from [`load_columns`].
pub fn file_means(path: &Path, config: &MetricConfig) -> Result<FileMeans> {
    let columns = load_columns(path, config)?;
    let mut means = FileMeans::with_capacity(columns.len());
    for (name, samples) in columns {
        let trimmed = trimmed_mean(&samples);
        means.insert(name, (trimmed.mean, trimmed.kept));
    }
    Ok(means)
}

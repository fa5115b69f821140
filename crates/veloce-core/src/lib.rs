// SPDX-License-Identifier: MIT OR Apache-2.0
//! Core types, error handling, and statistics for veloce
//!
//! This crate provides the foundational types used across the veloce ecosystem:
//!
//! - [`error`] - Error types and Result alias
//! - [`config`] - Metric configuration
//! - [`stats`] - Normal fit and trimmed-mean estimation
//! - [`speedup`] - Speedup and efficiency formulas
//! - [`table`] - Typed table cells and per-folder run tables

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

/// Error types for veloce operations
pub mod error;
/// Metric configuration: which columns to extract and how to treat them
pub mod config;
/// Normal distribution fitting and the trimmed-mean estimator
pub mod stats;
/// Speedup and efficiency formulas
pub mod speedup;
/// Typed table cells and the per-folder run table
pub mod table;
// Re-exports for convenience
pub use config::{MetricConfig, MetricFlags};
pub use error::{Result, VeloceError};
pub use speedup::compute_speedup;
pub use stats::{NormalFit, trimmed_mean};
pub use table::{Cell, RunTable};

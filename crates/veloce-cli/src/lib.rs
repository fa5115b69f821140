// SPDX-License-Identifier: MIT OR Apache-2.0
//! # veloce-cli
//!
//! Command-line interface for veloce - benchmark measure extraction,
//! speedup tables and plots.
//!
//! ## Usage
//!
//! ```bash
//! # Aggregate every SIZE-<n>-O<opt> folder under ./measure
//! veloce measure
//!
//! # Echo each table to stdout as well
//! veloce measure --print-tables
//! ```
//!
//! Each conforming folder gains a `psize-<size>-<opt>-table.csv` text table,
//! a `speedup-<size>-<opt>.png` chart, and (for histogram-flagged metrics)
//! `png/<metric>_<file>.png` histograms.
//!
//! ## Library Usage
//!
//! This crate is primarily a CLI tool. For programmatic access, use the
//! constituent library crates directly:
//!
//! - [`veloce-extract`](https://docs.rs/veloce-extract) - Discovery, sample
//!   loading, and the batch pipeline
//! - [`veloce-report`](https://docs.rs/veloce-report) - Table, chart, and
//!   histogram rendering
//! - [`veloce-core`](https://docs.rs/veloce-core) - Statistics and core types

#![warn(missing_docs)]

/// Re-export of veloce-extract for the extraction pipeline.
pub use veloce_extract as extract;

/// Re-export of veloce-report for rendering.
pub use veloce_report as report;

/// Re-export of veloce-core for core types.
pub use veloce_core as core;

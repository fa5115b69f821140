// SPDX-License-Identifier: MIT OR Apache-2.0
//! Rendering and persistence for veloce run tables
//!
//! - [`table`] - Fixed-width text tables
//! - [`plot`] - Speedup-vs-processors line charts
//! - [`histogram`] - Per-metric sample histograms with a density overlay
//!
//! All renderers share the same persistence contract: asking to save without
//! a destination filename is an explicit error, raised before anything is
//! written.

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

/// Fixed-width text table rendering
pub mod table;
/// Speedup chart rendering
pub mod plot;
/// Sample histogram rendering
pub mod histogram;

pub use plot::{PlotOptions, save_speedup_plot};
pub use table::{TableOptions, render_table, save_table};

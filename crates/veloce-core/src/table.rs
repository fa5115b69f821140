// SPDX-License-Identifier: MIT OR Apache-2.0
//! Typed table cells and the per-folder run table.
//!
//! Rows keep their cells typed rather than pre-stringified so the plot
//! renderer can read `Threads` and `Speedup` back out as numbers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// Version label ("Serial" / "Parallel").
    Text(String),
    /// Thread count.
    Int(u32),
    /// Metric mean, speedup, or efficiency.
    Float(f64),
}

impl Cell {
    /// Numeric view of the cell, if it holds a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Text(_) => None,
            Self::Int(n) => Some(f64::from(*n)),
            Self::Float(x) => Some(*x),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:.6}"),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<u32> for Cell {
    fn from(n: u32) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Cell {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

/// Header plus ordered rows for one problem-size folder.
///
/// Row order is the lexicographic order the sample files were discovered in,
/// not thread-count order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunTable {
    /// Ordered column names.
    pub header: Vec<String>,
    /// One row per sample file, each the same length as `header`.
    pub rows: Vec<Vec<Cell>>,
}

impl RunTable {
    /// Empty table with the given header.
    #[must_use]
    pub const fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Append a row.
    pub fn push(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Index of a column by exact header name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }
}

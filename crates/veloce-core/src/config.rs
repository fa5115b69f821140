// SPDX-License-Identifier: MIT OR Apache-2.0
//! Metric configuration.
//!
//! A [`MetricConfig`] names the CSV columns the pipeline extracts and, per
//! metric, whether to emit a histogram and whether to derive speedup and
//! efficiency columns. The configuration is built once at startup and passed
//! explicitly into the pipeline; nothing in the run mutates it.
//!
//! Order matters: table columns are emitted in configuration order.

use serde::{Deserialize, Serialize};

/// Per-metric switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricFlags {
    /// Render a histogram of the trimmed sample set for this metric.
    pub png: bool,
    /// Append Speedup and Efficiency columns after this metric's mean.
    pub speedup: bool,
}

/// Ordered, immutable set of metrics to extract from each sample file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricConfig {
    metrics: Vec<(String, MetricFlags)>,
}

impl MetricConfig {
    /// Empty configuration; add metrics with [`Self::with_metric`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            metrics: Vec::new(),
        }
    }

    /// Append a metric, preserving insertion order.
    #[must_use]
    pub fn with_metric(mut self, name: impl Into<String>, flags: MetricFlags) -> Self {
        self.metrics.push((name.into(), flags));
        self
    }

    /// Iterate metrics in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, MetricFlags)> {
        self.metrics.iter().map(|(n, f)| (n.as_str(), *f))
    }

    /// Number of configured metrics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Whether no metrics are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Flags for a metric by name, if configured.
    #[must_use]
    pub fn flags(&self, name: &str) -> Option<MetricFlags> {
        self.metrics
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| *f)
    }

    /// Table header for this configuration: `Version`, `Threads`, one
    /// capitalized column per metric, with `Speedup` and `Efficiency`
    /// inserted after each speedup-flagged metric.
    #[must_use]
    pub fn header(&self) -> Vec<String> {
        let mut header = vec!["Version".to_string(), "Threads".to_string()];
        for (name, flags) in self.iter() {
            header.push(capitalize(name));
            if flags.speedup {
                header.push("Speedup".to_string());
                header.push("Efficiency".to_string());
            }
        }
        header
    }
}

impl Default for MetricConfig {
    /// The radix-sort contest metric set: `init`, `radix_sort`, `user`,
    /// `sys` plain, `elapsed` with histogram and speedup columns.
    fn default() -> Self {
        Self::new()
            .with_metric("init", MetricFlags::default())
            .with_metric("radix_sort", MetricFlags::default())
            .with_metric("user", MetricFlags::default())
            .with_metric("sys", MetricFlags::default())
            .with_metric(
                "elapsed",
                MetricFlags {
                    png: true,
                    speedup: true,
                },
            )
    }
}

/// Uppercase the first ASCII letter, dropping underscores: `radix_sort`
/// becomes `Radixsort` to match the historical table header.
fn capitalize(name: &str) -> String {
    let compact: String = name.chars().filter(|c| *c != '_').collect();
    let mut chars = compact.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_ascii_uppercase().to_string() + chars.as_str()
    })
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! Normal fitting and the trimmed-mean estimator.
//!
//! Timing samples from repeated benchmark trials carry occasional extreme
//! outliers (scheduler noise, cold caches). The estimator here fits a normal
//! distribution, discards samples beyond one standard deviation of the fit,
//! and refits on the survivors; the second-pass mean is the metric's
//! representative value.

use serde::{Deserialize, Serialize};

/// Maximum-likelihood normal fit of a sample set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalFit {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation (ddof = 0).
    pub std: f64,
}

impl NormalFit {
    /// Fit mean and population standard deviation to `samples`.
    ///
    /// Permissive by contract: an empty slice yields a zero fit rather than
    /// an error, and a single sample yields `std == 0`.
    #[must_use]
    pub fn fit(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self {
                mean: 0.0,
                std: 0.0,
            };
        }
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        Self {
            mean,
            std: variance.sqrt(),
        }
    }

    /// Keep only samples strictly inside `(mean - std, mean + std)`.
    #[must_use]
    pub fn filter(&self, samples: &[f64]) -> Vec<f64> {
        samples
            .iter()
            .copied()
            .filter(|x| *x > self.mean - self.std && *x < self.mean + self.std)
            .collect()
    }
}

/// Result of the two-pass trimmed-mean estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct TrimmedMean {
    /// Second-pass mean; the metric's representative value.
    pub mean: f64,
    /// Samples that survived the one-sigma filter (what a histogram shows).
    pub kept: Vec<f64>,
}

/// Fit, filter to one standard deviation, refit, and return the second-pass
/// mean together with the surviving samples.
///
/// When the strict one-sigma interval keeps nothing (a zero-variance sample
/// set has an empty open interval), the first-pass mean stands and the full
/// sample set is reported as kept. No minimum-sample validation is applied;
/// tiny survivor sets produce statistically weak but well-defined means.
#[must_use]
pub fn trimmed_mean(samples: &[f64]) -> TrimmedMean {
    let first = NormalFit::fit(samples);
    let kept = first.filter(samples);
    if kept.is_empty() {
        return TrimmedMean {
            mean: first.mean,
            kept: samples.to_vec(),
        };
    }
    let second = NormalFit::fit(&kept);
    TrimmedMean {
        mean: second.mean,
        kept,
    }
}

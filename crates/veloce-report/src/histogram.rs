// SPDX-License-Identifier: MIT OR Apache-2.0
//! Sample histogram rendering with a fitted-normal density overlay.
//!
//! Renders the trimmed sample set of one (metric, file) pair as binned
//! frequency bars, overlaid with the fitted normal density scaled into count
//! space — the equivalent of the historical kernel-density histogram.

use std::path::Path;

use plotters::prelude::*;
use veloce_core::stats::NormalFit;
use veloce_core::{Result, VeloceError};

const CHART_SIZE: (u32, u32) = (800, 600);
const DENSITY_STEPS: usize = 200;

fn plot_err<E: std::fmt::Display>(e: E) -> VeloceError {
    VeloceError::Plot(e.to_string())
}

/// Bin the samples with the square-root choice of bin count.
///
/// Returns `(bin edges lower bound, bin width, counts)`. A degenerate range
/// (all samples equal) is widened to one unit so a single bar still draws.
#[allow(clippy::cast_possible_truncation)]
fn bin(samples: &[f64]) -> (f64, f64, Vec<usize>) {
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (min, max) = if (max - min).abs() < f64::EPSILON {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };
    let bins = (samples.len() as f64).sqrt().ceil().max(1.0) as usize;
    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &x in samples {
        let idx = (((x - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    (min, width, counts)
}

/// Render a histogram of `samples` to `path`.
///
/// An empty sample set produces an empty chart rather than an error, in
/// keeping with the estimator's permissive contract.
///
/// # Errors
/// [`VeloceError::Plot`] when the drawing backend fails.
pub fn save_histogram(samples: &[f64], path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;
    if samples.is_empty() {
        root.present().map_err(plot_err)?;
        return Ok(());
    }

    let (lo, width, counts) = bin(samples);
    let hi = width.mul_add(counts.len() as f64, lo);
    let y_max = counts.iter().copied().max().unwrap_or(1).max(1) as f64 * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(lo..hi, 0.0..y_max)
        .map_err(plot_err)?;
    chart
        .configure_mesh()
        .y_desc("Count")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(counts.iter().enumerate().map(|(i, &count)| {
            let x0 = width.mul_add(i as f64, lo);
            let x1 = x0 + width;
            Rectangle::new([(x0, 0.0), (x1, count as f64)], BLUE.mix(0.4).filled())
        }))
        .map_err(plot_err)?;

    // Density overlay: the fitted normal pdf scaled by n * bin_width, so it
    // lives in the same count space as the bars. Skipped for zero variance.
    let fit = NormalFit::fit(samples);
    if fit.std > 0.0 {
        let scale = samples.len() as f64 * width;
        let step = (hi - lo) / DENSITY_STEPS as f64;
        let curve = (0..=DENSITY_STEPS).map(|i| {
            let x = step.mul_add(i as f64, lo);
            let z = (x - fit.mean) / fit.std;
            let pdf = (-0.5 * z * z).exp() / (fit.std * (2.0 * std::f64::consts::PI).sqrt());
            (x, pdf * scale)
        });
        chart
            .draw_series(LineSeries::new(curve, &RED))
            .map_err(plot_err)?;
    }

    root.present().map_err(plot_err)?;
    Ok(())
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! Speedup-vs-processors chart rendering.
//!
//! The experimental series is read back out of the run table by column name
//! (`Threads`, `Speedup`), prefixed with the origin point, and drawn against
//! the ideal `y = x` line on linear axes.

use std::path::PathBuf;

use plotters::prelude::*;
use veloce_core::{Result, RunTable, VeloceError};

const CHART_SIZE: (u32, u32) = (1200, 800);

/// How to dispose of a rendered plot.
#[derive(Debug, Clone, Default)]
pub struct PlotOptions {
    /// Persist to `name`.
    pub save: bool,
    /// Destination path; required when `save` is set.
    pub name: Option<PathBuf>,
}

fn plot_err<E: std::fmt::Display>(e: E) -> VeloceError {
    VeloceError::Plot(e.to_string())
}

/// Extract the `(threads, speedup)` series from a run table.
///
/// The first row (the serial baseline) is skipped and an implicit origin
/// point `(0, 0)` anchors the series, matching the historical chart.
///
/// # Errors
/// [`VeloceError::MissingPlotColumn`] when `Threads` or `Speedup` is absent
/// from the header.
pub fn speedup_series(run: &RunTable) -> Result<Vec<(f64, f64)>> {
    let threads_pos = run
        .column("Threads")
        .ok_or_else(|| VeloceError::MissingPlotColumn {
            column: "Threads".to_string(),
        })?;
    let speedup_pos = run
        .column("Speedup")
        .ok_or_else(|| VeloceError::MissingPlotColumn {
            column: "Speedup".to_string(),
        })?;

    let mut series = vec![(0.0, 0.0)];
    for row in run.rows.iter().skip(1) {
        let x = row.get(threads_pos).and_then(veloce_core::Cell::as_f64);
        let y = row.get(speedup_pos).and_then(veloce_core::Cell::as_f64);
        if let (Some(x), Some(y)) = (x, y) {
            series.push((x, y));
        }
    }
    Ok(series)
}

/// Render the speedup chart and persist it per `options`.
///
/// # Errors
/// - [`VeloceError::NoFilename`] when `save` is set without a `name`
/// - [`VeloceError::MissingPlotColumn`] on a malformed header
/// - [`VeloceError::Plot`] when the drawing backend fails
pub fn save_speedup_plot(run: &RunTable, options: &PlotOptions) -> Result<()> {
    if options.save && options.name.is_none() {
        return Err(VeloceError::NoFilename { artifact: "plot" });
    }
    let series = speedup_series(run)?;
    let Some(name) = options.name.as_ref().filter(|_| options.save) else {
        return Ok(());
    };

    let x_max = series
        .iter()
        .map(|(x, _)| *x)
        .fold(1.0f64, f64::max);
    let y_max = series
        .iter()
        .map(|(_, y)| *y)
        .fold(x_max, f64::max);

    let root = BitMapBackend::new(name, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max * 1.05, 0.0..y_max * 1.05)
        .map_err(plot_err)?;
    chart
        .configure_mesh()
        .x_desc("Processors")
        .y_desc("Speedup")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(series.iter().copied(), &RED))
        .map_err(plot_err)?
        .label("Experimental")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    chart
        .draw_series(
            series
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, RED.filled())),
        )
        .map_err(plot_err)?;
    chart
        .draw_series(LineSeries::new(series.iter().map(|&(x, _)| (x, x)), &BLUE))
        .map_err(plot_err)?
        .label("Ideal")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;
    root.present().map_err(plot_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use veloce_core::table::Cell;

    fn speedup_table() -> RunTable {
        let mut run = RunTable::new(vec![
            "Version".into(),
            "Threads".into(),
            "Elapsed".into(),
            "Speedup".into(),
        ]);
        run.push(vec![
            Cell::from("Serial"),
            Cell::from(1u32),
            Cell::from(10.0),
            Cell::from(1.0),
        ]);
        run.push(vec![
            Cell::from("Parallel"),
            Cell::from(2u32),
            Cell::from(5.0),
            Cell::from(2.0),
        ]);
        run.push(vec![
            Cell::from("Parallel"),
            Cell::from(4u32),
            Cell::from(2.5),
            Cell::from(4.0),
        ]);
        run
    }

    #[test]
    fn test_series_skips_serial_row_and_anchors_origin() {
        let series = speedup_series(&speedup_table()).unwrap();
        assert_eq!(series, vec![(0.0, 0.0), (2.0, 2.0), (4.0, 4.0)]);
    }

    #[test]
    fn test_series_missing_column() {
        let run = RunTable::new(vec!["Version".into(), "Threads".into()]);
        let err = speedup_series(&run).unwrap_err();
        assert!(matches!(
            err,
            VeloceError::MissingPlotColumn { column } if column == "Speedup"
        ));
    }

    #[test]
    fn test_save_without_filename_fails() {
        let err = save_speedup_plot(
            &speedup_table(),
            &PlotOptions {
                save: true,
                name: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, VeloceError::NoFilename { artifact: "plot" }));
    }

    #[test]
    fn test_save_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("speedup-100-O2.png");
        save_speedup_plot(
            &speedup_table(),
            &PlotOptions {
                save: true,
                name: Some(path.clone()),
            },
        )
        .unwrap();
        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_single_row_table_still_renders() {
        let mut run = RunTable::new(vec![
            "Version".into(),
            "Threads".into(),
            "Speedup".into(),
        ]);
        run.push(vec![Cell::from("Serial"), Cell::from(1u32), Cell::from(1.0)]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("speedup.png");
        save_speedup_plot(
            &run,
            &PlotOptions {
                save: true,
                name: Some(path.clone()),
            },
        )
        .unwrap();
        assert!(path.is_file());
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! Per-folder pipeline: discover sample files, reduce them to trimmed means,
//! and build the folder's run table.

use std::path::{Path, PathBuf};

use veloce_core::table::Cell;
use veloce_core::{MetricConfig, Result, RunTable, VeloceError, compute_speedup};

use crate::naming::{FolderName, RunFile, Version};
use crate::samples::file_means;

/// Pending histogram for one png-flagged (metric, file) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramJob {
    /// Metric the samples belong to.
    pub metric: String,
    /// Sample file stem, without the `.csv` extension.
    pub file_stem: String,
    /// The samples that survived the one-sigma trim.
    pub samples: Vec<f64>,
}

impl HistogramJob {
    /// Target image path: `<folder>/png/<metric>_<stem>.png`.
    #[must_use]
    pub fn image_path(&self, folder: &Path) -> PathBuf {
        folder
            .join("png")
            .join(format!("{}_{}.png", self.metric, self.file_stem))
    }
}

/// Everything produced from one problem-size folder.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderReport {
    /// Parsed folder name.
    pub name: FolderName,
    /// Absolute (or root-relative) folder path.
    pub path: PathBuf,
    /// The aggregate table, one row per sample file in sorted name order.
    pub table: RunTable,
    /// Histograms to render for png-flagged metrics.
    pub histograms: Vec<HistogramJob>,
}

impl FolderReport {
    /// Destination path of the folder's table artifact.
    #[must_use]
    pub fn table_path(&self) -> PathBuf {
        self.path.join(self.name.table_filename())
    }

    /// Destination path of the folder's speedup plot artifact.
    #[must_use]
    pub fn plot_path(&self) -> PathBuf {
        self.path.join(self.name.plot_filename())
    }
}

/// List the conforming sample file names in a folder, sorted
/// lexicographically. Row order in the table follows this order.
///
/// # Errors
/// [`VeloceError::Io`] when the folder cannot be read.
pub fn list_run_files(folder: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(folder).map_err(|e| VeloceError::io(folder, e))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| VeloceError::io(folder, e))?;
        let is_file = entry
            .file_type()
            .map_err(|e| VeloceError::io(entry.path(), e))?
            .is_file();
        if !is_file {
            continue;
        }
        if let Some(name) = entry.file_name().to_str()
            && RunFile::matches(name)
        {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Process one problem-size folder into a [`FolderReport`].
///
/// Every conforming sample file contributes one row, in sorted file-name
/// order. Speedup and efficiency for speedup-flagged metrics are computed
/// against the folder's serial baseline: the elapsed-column trimmed mean of
/// the `NTH-00` file. The baseline is captured when the serial file's row is
/// built, so the serial file's lexicographic position must precede any row
/// that needs it (which holds for the two-digit thread encoding).
///
/// # Errors
/// - [`VeloceError::BadName`] if the folder name does not conform
/// - [`VeloceError::MissingBaseline`] the first time a speedup is requested
///   with no serial file seen
/// - any sample-loading failure from [`file_means`]
pub fn process_folder(folder: &Path, config: &MetricConfig) -> Result<FolderReport> {
    let folder_name = folder
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| VeloceError::BadName {
            name: folder.display().to_string(),
            kind: "folder",
        })?;
    let name = FolderName::parse(folder_name)?;

    let mut table = RunTable::new(config.header());
    let mut histograms = Vec::new();
    // Serial elapsed mean; None until the NTH-00 file has been processed.
    let mut baseline: Option<f64> = None;

    for file_name in list_run_files(folder)? {
        println!("Processing : {file_name}");
        let run = RunFile::parse(&file_name)?;
        let path = folder.join(&file_name);
        let means = file_means(&path, config)?;

        if run.version == Version::Serial {
            baseline = means.get("elapsed").map(|(mean, _)| *mean);
        }

        let mut row: Vec<Cell> = vec![run.version.label().into(), run.threads.into()];
        for (metric, flags) in config.iter() {
            let (mean, kept) = means.get(metric).map_or((0.0, None), |(m, k)| (*m, Some(k)));
            row.push(mean.into());
            if flags.speedup {
                // Baseline is always the serial file's *elapsed* mean, even
                // for other speedup-flagged metrics and for the serial row
                // itself (historical behavior, kept as-is).
                let t = baseline.ok_or_else(|| VeloceError::MissingBaseline {
                    folder: folder_name.to_string(),
                })?;
                let s = compute_speedup(t, mean, run.threads);
                row.push(s.speedup.into());
                row.push(s.efficiency.into());
            }
            if flags.png
                && let Some(kept) = kept
            {
                let stem = file_name.trim_end_matches(".csv");
                histograms.push(HistogramJob {
                    metric: metric.to_string(),
                    file_stem: stem.to_string(),
                    samples: kept.clone(),
                });
            }
        }
        table.push(row);
    }

    Ok(FolderReport {
        name,
        path: folder.to_path_buf(),
        table,
        histograms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use veloce_core::MetricFlags;

    fn elapsed_config() -> MetricConfig {
        MetricConfig::new().with_metric(
            "elapsed",
            MetricFlags {
                png: false,
                speedup: true,
            },
        )
    }

    fn write_runs(folder: &Path, runs: &[(&str, &str)]) {
        for (name, contents) in runs {
            let mut file = std::fs::File::create(folder.join(name)).unwrap();
            file.write_all(contents.as_bytes()).unwrap();
        }
    }

    fn make_folder(dir: &Path, name: &str) -> PathBuf {
        let folder = dir.join(name);
        std::fs::create_dir(&folder).unwrap();
        folder
    }

    #[test]
    fn test_rows_follow_sorted_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let folder = make_folder(dir.path(), "SIZE-100-O2");
        // Written out of order on purpose.
        write_runs(
            &folder,
            &[
                ("SIZE-100-NTH-04-O2.csv", "elapsed\n2.5\n2.5\n"),
                ("SIZE-100-NTH-00-O2.csv", "elapsed\n10.0\n10.0\n"),
                ("SIZE-100-NTH-02-O2.csv", "elapsed\n5.0\n5.0\n"),
            ],
        );
        let report = process_folder(&folder, &elapsed_config()).unwrap();
        assert_eq!(report.table.rows.len(), 3);
        assert_eq!(report.table.rows[0][0], Cell::Text("Serial".into()));
        assert_eq!(report.table.rows[0][1], Cell::Int(1));
        assert_eq!(report.table.rows[1][0], Cell::Text("Parallel".into()));
        assert_eq!(report.table.rows[1][1], Cell::Int(2));
        assert_eq!(report.table.rows[2][1], Cell::Int(4));
    }

    #[test]
    fn test_speedup_against_serial_baseline() {
        let dir = tempfile::tempdir().unwrap();
        let folder = make_folder(dir.path(), "SIZE-100-O2");
        write_runs(
            &folder,
            &[
                ("SIZE-100-NTH-00-O2.csv", "elapsed\n10.0\n10.0\n"),
                ("SIZE-100-NTH-02-O2.csv", "elapsed\n5.0\n5.0\n"),
            ],
        );
        let report = process_folder(&folder, &elapsed_config()).unwrap();
        let speedup_col = report.table.column("Speedup").unwrap();
        let eff_col = report.table.column("Efficiency").unwrap();
        // Serial row: speedup 1.0 against itself.
        assert_eq!(report.table.rows[0][speedup_col], Cell::Float(1.0));
        assert_eq!(report.table.rows[0][eff_col], Cell::Float(1.0));
        // Two threads at half the time: speedup 2, efficiency 1.
        assert_eq!(report.table.rows[1][speedup_col], Cell::Float(2.0));
        assert_eq!(report.table.rows[1][eff_col], Cell::Float(1.0));
    }

    #[test]
    fn test_missing_baseline_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let folder = make_folder(dir.path(), "SIZE-100-O2");
        write_runs(&folder, &[("SIZE-100-NTH-02-O2.csv", "elapsed\n5.0\n5.0\n")]);
        let err = process_folder(&folder, &elapsed_config()).unwrap_err();
        assert!(matches!(err, VeloceError::MissingBaseline { .. }));
    }

    #[test]
    fn test_no_speedup_flag_tolerates_missing_baseline() {
        let dir = tempfile::tempdir().unwrap();
        let folder = make_folder(dir.path(), "SIZE-100-O2");
        write_runs(&folder, &[("SIZE-100-NTH-02-O2.csv", "elapsed\n5.0\n5.0\n")]);
        let config = MetricConfig::new().with_metric("elapsed", MetricFlags::default());
        let report = process_folder(&folder, &config).unwrap();
        assert_eq!(report.table.rows.len(), 1);
    }

    #[test]
    fn test_histogram_jobs_for_png_metrics() {
        let dir = tempfile::tempdir().unwrap();
        let folder = make_folder(dir.path(), "SIZE-100-O2");
        write_runs(
            &folder,
            &[("SIZE-100-NTH-00-O2.csv", "elapsed\n1.0\n2.0\n3.0\n")],
        );
        let config = MetricConfig::new().with_metric(
            "elapsed",
            MetricFlags {
                png: true,
                speedup: false,
            },
        );
        let report = process_folder(&folder, &config).unwrap();
        assert_eq!(report.histograms.len(), 1);
        let job = &report.histograms[0];
        assert_eq!(job.metric, "elapsed");
        assert_eq!(job.file_stem, "SIZE-100-NTH-00-O2");
        assert_eq!(
            job.image_path(&folder),
            folder.join("png").join("elapsed_SIZE-100-NTH-00-O2.png")
        );
    }

    #[test]
    fn test_non_conforming_files_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let folder = make_folder(dir.path(), "SIZE-100-O2");
        write_runs(
            &folder,
            &[
                ("SIZE-100-NTH-00-O2.csv", "elapsed\n1.0\n"),
                ("notes.txt", "not a run"),
                ("SIZE-100-NTH-2-O2.csv", "elapsed\n1.0\n"),
            ],
        );
        let files = list_run_files(&folder).unwrap();
        assert_eq!(files, vec!["SIZE-100-NTH-00-O2.csv"]);
    }
}

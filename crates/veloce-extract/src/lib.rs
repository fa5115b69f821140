// SPDX-License-Identifier: MIT OR Apache-2.0
//! Benchmark CSV extraction for veloce
//!
//! This crate turns a tree of benchmark sample files into per-folder summary
//! tables and plots:
//!
//! - [`naming`] - The `SIZE-<n>-O<opt>` folder and run-file naming scheme
//! - [`samples`] - CSV sample loading and per-file trimmed means
//! - [`folder`] - The per-folder row-building pipeline
//! - [`extraction`] - The batch entry point over a measures root
//!
//! Processing is strictly sequential, one folder and one file at a time, and
//! every failure aborts the whole batch.

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

/// Folder and run-file naming scheme
pub mod naming;
/// Sample CSV loading
pub mod samples;
/// Per-folder pipeline
pub mod folder;

use std::path::{Path, PathBuf};

use veloce_core::{MetricConfig, Result, VeloceError};
use veloce_report::plot::{PlotOptions, save_speedup_plot};
use veloce_report::table::{TableOptions, save_table};

pub use folder::{FolderReport, HistogramJob, process_folder};
pub use naming::{FolderName, RunFile, Version};

/// Options for a batch [`extraction`] run.
#[derive(Debug, Clone, Default)]
pub struct ExtractionOptions {
    /// Echo each rendered table to stdout.
    pub print_tables: bool,
}

/// List the subfolders of `root` whose names conform to the
/// `SIZE-<digits>-O<digits>` pattern, sorted by name.
///
/// # Errors
/// [`VeloceError::Io`] when `root` cannot be read.
pub fn list_folders(root: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(root).map_err(|e| VeloceError::io(root, e))?;
    let mut folders = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| VeloceError::io(root, e))?;
        let is_dir = entry
            .file_type()
            .map_err(|e| VeloceError::io(entry.path(), e))?
            .is_dir();
        if is_dir
            && let Some(name) = entry.file_name().to_str()
            && FolderName::matches(name)
        {
            folders.push(entry.path());
        }
    }
    folders.sort();
    Ok(folders)
}

/// Batch entry point: process every conforming folder under `root`, writing
/// `psize-<size>-<opt>-table.csv`, `speedup-<size>-<opt>.png`, and any
/// configured histograms into each folder.
///
/// The `threads` list is part of the invocation surface for parity with the
/// historical tooling but takes no part in the computation; sample files
/// declare their own thread counts in their names.
///
/// # Errors
/// Any discovery, parsing, or rendering failure aborts the remaining batch.
pub fn extraction(
    root: &Path,
    config: &MetricConfig,
    threads: &[u32],
    options: &ExtractionOptions,
) -> Result<Vec<FolderReport>> {
    println!("Listing folders for problem size (requested thread counts: {threads:?})");
    let folders = list_folders(root)?;
    println!(
        "Found folders : {:?}",
        folders
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect::<Vec<_>>()
    );

    let mut reports = Vec::with_capacity(folders.len());
    for folder in &folders {
        println!("Folder : {}", folder.display());
        let report = process_folder(folder, config)?;

        save_table(
            &report.table,
            &TableOptions {
                save: true,
                print: options.print_tables,
                name: Some(report.table_path()),
            },
        )?;
        save_speedup_plot(
            &report.table,
            &PlotOptions {
                save: true,
                name: Some(report.plot_path()),
            },
        )?;
        if !report.histograms.is_empty() {
            let png_dir = folder.join("png");
            std::fs::create_dir_all(&png_dir).map_err(|e| VeloceError::io(&png_dir, e))?;
            for job in &report.histograms {
                veloce_report::histogram::save_histogram(job.samples.as_slice(), &job.image_path(folder))?;
            }
        }
        reports.push(report);
    }
    Ok(reports)
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fixed-width text table rendering.
//!
//! The table artifact keeps the historical `.csv` extension but holds a
//! formatted, pipe-delimited text table, not machine-parseable CSV.

use std::path::PathBuf;

use comfy_table::Table;
use comfy_table::presets::ASCII_MARKDOWN;
use veloce_core::{Result, RunTable, VeloceError};

/// How to dispose of a rendered table.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// Persist to `name`.
    pub save: bool,
    /// Echo the rendered table to stdout.
    pub print: bool,
    /// Destination path; required when `save` is set.
    pub name: Option<PathBuf>,
}

/// Render a run table to its fixed-width text form.
#[must_use]
pub fn render_table(run: &RunTable) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_MARKDOWN);
    table.set_header(run.header.clone());
    for row in &run.rows {
        table.add_row(row.iter().map(ToString::to_string).collect::<Vec<_>>());
    }
    table.to_string()
}

/// Render a run table and persist/echo it per `options`.
///
/// # Errors
/// - [`VeloceError::NoFilename`] when `save` is set without a `name`,
///   raised before anything is rendered or written
/// - [`VeloceError::Io`] when the write fails
pub fn save_table(run: &RunTable, options: &TableOptions) -> Result<()> {
    if options.save && options.name.is_none() {
        return Err(VeloceError::NoFilename { artifact: "table" });
    }
    let rendered = render_table(run);
    if options.save
        && let Some(name) = &options.name
    {
        std::fs::write(name, &rendered).map_err(|e| VeloceError::io(name, e))?;
    }
    if options.print {
        println!("{rendered}");
    }
    Ok(())
}

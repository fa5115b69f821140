// SPDX-License-Identifier: MIT OR Apache-2.0
//! veloce CLI binary - benchmark measure extraction, speedup tables and plots

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use veloce_core::MetricConfig;
use veloce_extract::{ExtractionOptions, extraction};

#[derive(Parser)]
#[command(name = "veloce")]
#[command(version, about, long_about = None)]
struct Args {
    /// Measures root: directory containing SIZE-<n>-O<opt> folders
    #[arg(value_name = "ROOT", default_value = "measure")]
    root: PathBuf,

    /// Echo each rendered table to stdout
    #[arg(long = "print-tables")]
    print_tables: bool,

    /// Thread counts the campaign was run with (informational; the sample
    /// files declare their own thread counts in their names)
    #[arg(long, value_delimiter = ',', default_value = "0,1,2,4,8")]
    threads: Vec<u32>,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = MetricConfig::default();
    let options = ExtractionOptions {
        print_tables: args.print_tables,
    };
    let reports = extraction(&args.root, &config, &args.threads, &options)
        .with_context(|| format!("extracting measures under {}", args.root.display()))?;
    println!("Processed {} folder(s)", reports.len());
    Ok(())
}

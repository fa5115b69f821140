// SPDX-License-Identifier: MIT OR Apache-2.0
//! End-to-end tests for the veloce binary.

use std::io::Write;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_runs(folder: &Path, runs: &[(&str, &str)]) {
    for (name, contents) in runs {
        let mut file = std::fs::File::create(folder.join(name)).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }
}

const COLUMNS: &str = "init,radix_sort,user,sys,elapsed\n";

fn trial_rows(elapsed: f64) -> String {
    let mut body = String::from(COLUMNS);
    for i in 0..5 {
        let jitter = f64::from(i) * 0.001;
        body.push_str(&format!(
            "0.1,0.5,0.4,0.05,{:.4}\n",
            elapsed + jitter
        ));
    }
    body
}

#[test]
fn extracts_a_measures_tree() {
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("SIZE-100-O2");
    std::fs::create_dir(&folder).unwrap();
    write_runs(
        &folder,
        &[
            ("SIZE-100-NTH-00-O2.csv", &trial_rows(10.0)),
            ("SIZE-100-NTH-02-O2.csv", &trial_rows(5.0)),
            ("SIZE-100-NTH-04-O2.csv", &trial_rows(2.5)),
        ],
    );

    Command::cargo_bin("veloce")
        .unwrap()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Folder :"))
        .stdout(predicate::str::contains("Processed 1 folder(s)"));

    assert!(folder.join("psize-100-O2-table.csv").is_file());
    assert!(folder.join("speedup-100-O2.png").is_file());
    // elapsed carries the png flag in the default configuration.
    assert!(
        folder
            .join("png")
            .join("elapsed_SIZE-100-NTH-00-O2.png")
            .is_file()
    );
}

#[test]
fn print_tables_echoes_the_table() {
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("SIZE-50-O1");
    std::fs::create_dir(&folder).unwrap();
    write_runs(&folder, &[("SIZE-50-NTH-00-O1.csv", &trial_rows(4.0))]);

    Command::cargo_bin("veloce")
        .unwrap()
        .arg(dir.path())
        .arg("--print-tables")
        .assert()
        .success()
        .stdout(predicate::str::contains("Version"))
        .stdout(predicate::str::contains("Serial"));
}

#[test]
fn missing_root_fails() {
    Command::cargo_bin("veloce")
        .unwrap()
        .arg("/nonexistent/measure/root")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn nonconforming_folders_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("SIZE-abc-O1")).unwrap();
    std::fs::create_dir(dir.path().join("SIZE-100")).unwrap();

    Command::cargo_bin("veloce")
        .unwrap()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 0 folder(s)"));
}

#[test]
fn missing_metric_column_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("SIZE-100-O2");
    std::fs::create_dir(&folder).unwrap();
    // No 'elapsed' column.
    write_runs(
        &folder,
        &[("SIZE-100-NTH-00-O2.csv", "init,user\n0.1,0.4\n")],
    );

    Command::cargo_bin("veloce")
        .unwrap()
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

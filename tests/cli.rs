use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const THERMOGRAM: &str = "time,temp,g,ghat\n\
0,373,1.0,1.0\n\
60,378,0.9,0.92\n\
120,383,0.6,0.58\n\
180,388,0.2,0.25\n\
240,393,0.0,0.02\n";

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("rpo").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("rpo"));
}

#[test]
fn dict_prints_axis_labels() {
    let mut cmd = Command::cargo_bin("rpo").unwrap();
    cmd.args(["dict", "--case", "rpo_labs"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("fraction/time (s^-1)"));
}

#[test]
fn dict_rejects_unknown_case() {
    let mut cmd = Command::cargo_bin("rpo").unwrap();
    cmd.args(["dict", "--case", "bogus_case"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized case"));
}

#[test]
fn dict_series_case_needs_input() {
    let mut cmd = Command::cargo_bin("rpo").unwrap();
    cmd.args(["dict", "--case", "rpo_rd"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("requires a data object"));
}

#[test]
fn plot_writes_svg() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tg.csv");
    let out = dir.path().join("tg.svg");
    fs::write(&input, THERMOGRAM).unwrap();

    let mut cmd = Command::cargo_bin("rpo").unwrap();
    cmd.arg("plot")
        .arg("--input")
        .arg(&input)
        .arg("--input")
        .arg(&input)
        .args(["--xaxis", "temp", "--yaxis", "rate", "--legend", "bottom"])
        .arg("--out")
        .arg(&out);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Wrote plot"));

    let svg = fs::read_to_string(&out).unwrap();
    assert_eq!(svg.matches("Modeled Data").count(), 1);
}

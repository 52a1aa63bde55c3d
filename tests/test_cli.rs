//! Tests running the command line tools

#![cfg(feature = "cli")]

use std::fs;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

fn write_temp(content: &str) -> NamedTempFile {
    let mut temp = NamedTempFile::new().expect("Failed to create temp file");
    temp.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    temp.flush().expect("Failed to flush temp file");
    temp
}

const KISS: &str = "\
.r a
0 a b 0
1 a c 0
0 b d 0
1 b e 0
0 c d 0
1 c e 0
0 d a 0
1 d a 1
0 e a 0
1 e a 1
";

const PLA: &str = ".i 2\n.o 1\n.ilb a b\n.ob f\n.p 3\n00 1\n01 1\n11 1\n.e\n";

#[test]
fn test_fsm_minimize_writes_both_outputs() {
    let input = write_temp(KISS);
    let dir = TempDir::new().unwrap();
    let kiss_out = dir.path().join("out.kiss");
    let dot_out = dir.path().join("out.dot");

    let output = Command::new(env!("CARGO_BIN_EXE_fsm-minimize"))
        .arg(input.path())
        .arg(&kiss_out)
        .arg(&dot_out)
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);

    let kiss = fs::read_to_string(&kiss_out).unwrap();
    assert!(kiss.contains(".s 3\n"));
    let dot = fs::read_to_string(&dot_out).unwrap();
    assert!(dot.contains("INIT -> \"a\";"));
}

#[test]
fn test_fsm_minimize_reset_override() {
    let input = write_temp(KISS);
    let dir = TempDir::new().unwrap();
    let kiss_out = dir.path().join("out.kiss");
    let dot_out = dir.path().join("out.dot");

    let output = Command::new(env!("CARGO_BIN_EXE_fsm-minimize"))
        .arg(input.path())
        .arg(&kiss_out)
        .arg(&dot_out)
        .args(["--reset", "e", "-s"])
        .output()
        .unwrap();
    assert!(output.status.success());

    // e is merged into d
    let kiss = fs::read_to_string(&kiss_out).unwrap();
    assert!(kiss.contains(".r d\n"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("merged e into d"));
}

#[test]
fn test_fsm_minimize_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_fsm-minimize"))
        .arg("only-one.kiss")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_fsm_minimize_bad_input_writes_nothing() {
    let input = write_temp("0 a b\n");
    let dir = TempDir::new().unwrap();
    let kiss_out = dir.path().join("out.kiss");
    let dot_out = dir.path().join("out.dot");

    let output = Command::new(env!("CARGO_BIN_EXE_fsm-minimize"))
        .arg(input.path())
        .arg(&kiss_out)
        .arg(&dot_out)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error reading KISS file"));
    assert!(!kiss_out.exists());
    assert!(!dot_out.exists());
}

#[test]
fn test_qm_minimize() {
    let input = write_temp(PLA);
    let dir = TempDir::new().unwrap();
    let pla_out = dir.path().join("out.pla");

    let output = Command::new(env!("CARGO_BIN_EXE_qm-minimize"))
        .arg(input.path())
        .arg(&pla_out)
        .output()
        .unwrap();
    assert!(output.status.success());

    let written = fs::read_to_string(&pla_out).unwrap();
    assert_eq!(written, ".i 2\n.o 1\n.ilb a b\n.ob f\n.p 2\n-1 1\n0- 1\n.e\n");
}

#[test]
fn test_qm_minimize_input_limit() {
    let input = write_temp(PLA);
    let dir = TempDir::new().unwrap();
    let pla_out = dir.path().join("out.pla");

    let output = Command::new(env!("CARGO_BIN_EXE_qm-minimize"))
        .arg(input.path())
        .arg(&pla_out)
        .args(["--max-inputs", "1"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(!pla_out.exists());
}

#[test]
fn test_qm_minimize_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_qm-minimize"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_robdd() {
    let input = write_temp(".i 2\n.o 1\n.ilb a b\n.p 1\n11 1\n.e\n");
    let dir = TempDir::new().unwrap();
    let dot_out = dir.path().join("out.dot");

    let output = Command::new(env!("CARGO_BIN_EXE_robdd"))
        .arg(input.path())
        .arg(&dot_out)
        .output()
        .unwrap();
    assert!(output.status.success());

    let dot = fs::read_to_string(&dot_out).unwrap();
    assert!(dot.contains("3 -> 4 [label=\"1\", style=solid]"));
}

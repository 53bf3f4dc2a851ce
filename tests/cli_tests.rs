//! Integration tests for the CLI interface
//!
//! Tests the main entry point and command parsing logic

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_no_args_runs_demo() {
    // Without arguments the full demo runs: machine then coin flip
    let mut cmd = Command::cargo_bin("undecidable").unwrap();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("The Halting Machine H(Qn)"))
        .stdout(predicate::str::contains("Complex Coin Flip"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("undecidable").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_invalid_command() {
    let mut cmd = Command::cargo_bin("undecidable").unwrap();
    cmd.arg("decide")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_eval_known_point() {
    let mut cmd = Command::cargo_bin("undecidable").unwrap();
    cmd.args(["eval", "h_arctan", "1"])
        .assert()
        .success()
        .stdout("0.5\n");
}

#[test]
fn test_eval_negative_value() {
    let mut cmd = Command::cargo_bin("undecidable").unwrap();
    cmd.args(["eval", "h_arctan", "-1"])
        .assert()
        .success()
        .stdout("-0.5\n");
}

#[test]
fn test_eval_accepts_infinity() {
    // Q halts on a looping input
    let mut cmd = Command::cargo_bin("undecidable").unwrap();
    cmd.args(["eval", "q_inverse", "inf"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_eval_unknown_function() {
    let mut cmd = Command::cargo_bin("undecidable").unwrap();
    cmd.args(["eval", "decide_all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown function"));
}

#[test]
fn test_eval_invalid_number() {
    let mut cmd = Command::cargo_bin("undecidable").unwrap();
    cmd.args(["eval", "h_arctan", "five"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_machine_depth_limits_iterations() {
    let mut cmd = Command::cargo_bin("undecidable").unwrap();
    cmd.args(["machine", "--depth", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Iteration 1"))
        .stdout(predicate::str::contains("Iteration 2").not());
}

#[test]
fn test_machine_custom_x_values() {
    let mut cmd = Command::cargo_bin("undecidable").unwrap();
    cmd.args(["machine", "--x-values", "0.5", "--depth", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Evaluating functions for x = 0.5"));
}

#[test]
fn test_machine_json_report() {
    let mut cmd = Command::cargo_bin("undecidable").unwrap();
    cmd.args(["machine", "--json", "--depth", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains("\"steps\""));
}

#[test]
fn test_machine_rejects_invalid_depth() {
    let mut cmd = Command::cargo_bin("undecidable").unwrap();
    cmd.args(["machine", "--depth", "deep"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_flip_completes_the_cycle() {
    let mut cmd = Command::cargo_bin("undecidable").unwrap();
    cmd.arg("flip")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "operation 0/8 (starting): (true, true, and)",
        ))
        .stdout(predicate::str::contains(
            "operation 8/8 (irotation): (true, true, and)",
        ));
}

#[test]
fn test_flip_parses_coins() {
    let mut cmd = Command::cargo_bin("undecidable").unwrap();
    cmd.args(["flip", "false", "yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "operation 0/8 (starting): (false, true, and)",
        ));
}

#[test]
fn test_logic_single_operation() {
    let mut cmd = Command::cargo_bin("undecidable").unwrap();
    cmd.args(["logic", "true", "true", "and", "inegation"])
        .assert()
        .success()
        .stdout("(true, true, or)\n");
}

#[test]
fn test_logic_unknown_operation() {
    let mut cmd = Command::cargo_bin("undecidable").unwrap();
    cmd.args(["logic", "true", "true", "and", "spin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown operation"));
}

#[test]
fn test_logic_invalid_connective() {
    let mut cmd = Command::cargo_bin("undecidable").unwrap();
    cmd.args(["logic", "true", "true", "xor", "negation"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_digest_known_contents() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notes.txt");
    std::fs::write(&path, b"abc").unwrap();

    let mut cmd = Command::cargo_bin("undecidable").unwrap();
    cmd.arg("digest")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ));
}

#[test]
fn test_digest_json_report() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notes.txt");
    std::fs::write(&path, b"abc").unwrap();

    let mut cmd = Command::cargo_bin("undecidable").unwrap();
    cmd.arg("digest")
        .arg("--json")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sha256\""));
}

#[test]
fn test_digest_missing_file() {
    let mut cmd = Command::cargo_bin("undecidable").unwrap();
    cmd.args(["digest", "/no/such/file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_digest_continues_past_failures() {
    // The good file still prints even when another file is missing
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notes.txt");
    std::fs::write(&path, b"abc").unwrap();

    let mut cmd = Command::cargo_bin("undecidable").unwrap();
    cmd.arg("digest")
        .arg("/no/such/file.txt")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ));
}

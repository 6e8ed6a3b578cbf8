use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn invalid_ids() -> Command {
    Command::new(env!("CARGO_BIN_EXE_invalid_ids"))
}

#[test]
fn shows_help() {
    invalid_ids()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid_ids"))
        .stdout(predicate::str::contains("--rule"));
}

#[test]
fn sample_input_reproduces_known_total() {
    invalid_ids()
        .assert()
        .success()
        .stderr(predicate::str::contains("INV 1188511885\n"))
        .stderr(predicate::str::ends_with("invalids = 1227775554\n"));
}

#[test]
fn repeated_rule_on_sample_input() {
    invalid_ids()
        .args(["--rule", "repeated", "--quiet"])
        .assert()
        .success()
        .stderr("invalids = 4174379265\n");
}

#[test]
fn explicit_input_lists_invalid_ids_in_order() {
    invalid_ids()
        .args(["11-22,95-115", "--jobs", "2"])
        .assert()
        .success()
        .stderr("INV 11\nINV 22\nINV 99\ninvalids = 132\n");
}

#[test]
fn malformed_range_exits_with_input_error() {
    invalid_ids()
        .arg("11-22,abc-22")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("abc-22"))
        .stderr(predicate::str::contains("INV").not());
}

#[test]
fn missing_separator_exits_with_input_error() {
    invalid_ids()
        .arg("11")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing '-' separator"));
}

#[test]
fn too_many_ranges_is_reported() {
    invalid_ids()
        .args(["1-2,3-4,5-6", "--max-ranges", "2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("at most 2"));
}

#[test]
fn inverted_range_policy() {
    invalid_ids()
        .args(["22-11,11-22", "-q"])
        .assert()
        .success()
        .stderr(predicate::str::ends_with("invalids = 33\n"));

    invalid_ids()
        .args(["22-11,11-22", "--reject-inverted"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Inverted range '22-11'"));
}

#[test]
fn json_output_on_stdout() {
    let assert = invalid_ids()
        .args(["11-22,998-1012", "--format", "json"])
        .assert()
        .success();
    let json: Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("Failed to parse JSON output");

    assert_eq!(json["total"], 1043);
    assert_eq!(json["reports"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["reports"][1]["invalid"], serde_json::json!([1010]));
}

#[test]
fn trace_logging_does_not_duplicate_inv_lines() {
    let assert = invalid_ids().args(["11-22,95-115", "-vvv"]).assert().success();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();

    let inv_lines: Vec<_> = stderr.lines().filter(|l| l.starts_with("INV ")).collect();
    assert_eq!(inv_lines, vec!["INV 11", "INV 22", "INV 99"]);
    assert!(stderr.contains("invalid id 99 in 95-115"));
    assert!(stderr.ends_with("invalids = 132\n"));
}

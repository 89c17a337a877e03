use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Write `contents` to `<name>` inside a fresh temp dir and return both. The
/// output file lands next to the input, so each test gets its own dir.
fn write_input(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    (dir, path)
}

fn csv_expand() -> Command {
    Command::cargo_bin("csv_expand").unwrap()
}

#[test]
fn test_expands_column_end_to_end() {
    let (dir, input) = write_input("poses.csv", "id,xyz\na,\"(1,2,3)\"\nb,\"(4,5,6)\"\n");

    csv_expand()
        .arg(&input)
        .arg("xyz")
        .arg("x,y,z")
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("poses_cleaned.csv")).unwrap();
    assert_eq!(output, "id,x,y,z\na,1,2,3\nb,4,5,6\n");
}

#[test]
fn test_source_file_is_left_untouched() {
    let contents = "id,xyz\na,\"(1,2,3)\"\n";
    let (_dir, input) = write_input("poses.csv", contents);

    csv_expand()
        .arg(&input)
        .arg("xyz")
        .arg("x,y,z")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&input).unwrap(), contents);
}

#[test]
fn test_prefix_flag_is_prepended_to_headers() {
    let (dir, input) = write_input("poses.csv", "id,xyz\na,\"(1,2)\"\n");

    csv_expand()
        .arg(&input)
        .arg("xyz")
        .arg("x,y")
        .args(["-p", "pos_"])
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("poses_cleaned.csv")).unwrap();
    assert_eq!(output, "id,pos_x,pos_y\na,1,2\n");
}

#[test]
fn test_quoted_expand_cols_into_is_accepted() {
    let (dir, input) = write_input("poses.csv", "xyz\n\"[7,8]\"\n");

    csv_expand()
        .arg(&input)
        .arg("xyz")
        .arg("\"x,y\"")
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("poses_cleaned.csv")).unwrap();
    assert_eq!(output, "x,y\n7,8\n");
}

#[test]
fn test_time_headers_are_normalized() {
    let (dir, input) = write_input(
        "session.csv",
        "timestamp,xyz,event_time\n0.5,\"(1,2)\",0.6\n",
    );

    csv_expand()
        .arg(&input)
        .arg("xyz")
        .arg("x,y")
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("session_cleaned.csv")).unwrap();
    assert_eq!(output, "time,x,y,time\n0.5,1,2,0.6\n");
}

#[test]
fn test_one_sided_quoting_is_a_usage_error() {
    let (dir, input) = write_input("poses.csv", "xyz\n\"(1,2)\"\n");

    csv_expand()
        .arg(&input)
        .arg("xyz")
        .arg("\"x,y")
        .assert()
        .failure()
        .stderr(predicate::str::contains("quote"));

    assert!(!dir.path().join("poses_cleaned.csv").exists());
}

#[test]
fn test_missing_column_fails_without_output() {
    let (dir, input) = write_input("poses.csv", "id,xyz\na,\"(1,2)\"\n");

    csv_expand()
        .arg(&input)
        .arg("abc")
        .arg("x,y")
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"abc\" was not found"));

    assert!(!dir.path().join("poses_cleaned.csv").exists());
}

#[test]
fn test_malformed_cell_fails_without_output() {
    let (dir, input) = write_input("poses.csv", "id,xyz\na,\"1,2,3\"\n");

    csv_expand()
        .arg(&input)
        .arg("xyz")
        .arg("x,y,z")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not be converted to a tuple"));

    assert!(!dir.path().join("poses_cleaned.csv").exists());
}

#[test]
fn test_arity_mismatch_names_row_and_col() {
    let (dir, input) = write_input("poses.csv", "id,xyz\na,\"(1,2)\"\n");

    csv_expand()
        .arg(&input)
        .arg("xyz")
        .arg("x,y,z")
        .assert()
        .failure()
        .stderr(predicate::str::contains("row 0, col 1"));

    assert!(!dir.path().join("poses_cleaned.csv").exists());
}

#[test]
fn test_non_csv_input_path_is_rejected() {
    let (_dir, input) = write_input("poses.txt", "id,xyz\na,\"(1,2)\"\n");

    csv_expand()
        .arg(&input)
        .arg("xyz")
        .arg("x,y")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not end in .csv"));
}

#[test]
fn test_missing_arguments_print_usage() {
    csv_expand()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

//! Integration tests for file conversion through the library API.

use std::fs;

use tempfile::TempDir;
use techcolor::{transform_file, Config, TransformError};

use crate::helpers::{fixtures_dir, load_fixture, write_file};

#[test]
fn converts_fixture_tech_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.csv");
    let config = Config::new(fixtures_dir().join("techfile.csv"), &output);

    let summary = transform_file(&config).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        load_fixture("techfile.expected.csv")
    );
    assert_eq!(summary.rows, 8);
    assert_eq!(summary.cells, 24);
    assert_eq!(summary.replaced, 4);
}

#[test]
fn input_file_is_left_unmodified() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "in.csv", "red,green\n");
    let config = Config::new(&input, dir.path().join("out.csv"));

    transform_file(&config).unwrap();

    assert_eq!(fs::read_to_string(&input).unwrap(), "red,green\n");
}

#[test]
fn existing_output_is_overwritten_in_full() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "in.csv", "blue\n");
    let output = write_file(
        dir.path(),
        "out.csv",
        "stale,content,that,is,much,longer\nsecond line\n",
    );

    transform_file(&Config::new(&input, &output)).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "0000ff\r\n");
}

#[test]
fn empty_input_creates_empty_output() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "in.csv", "");
    let output = dir.path().join("out.csv");

    let summary = transform_file(&Config::new(&input, &output)).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "");
    assert_eq!(summary.rows, 0);
}

#[test]
fn row_and_column_shape_is_preserved() {
    let dir = TempDir::new().unwrap();
    let content = "a,b,c\nred\n\n,,,\nx,y,tan,q,purple\n\n\n";
    let input = write_file(dir.path(), "in.csv", content);
    let output = dir.path().join("out.csv");

    transform_file(&Config::new(&input, &output)).unwrap();

    // No quoted fields, so every line is a row and every comma a delimiter
    let shape = |text: &str| -> Vec<usize> {
        text.lines()
            .map(|line| {
                if line.is_empty() {
                    0
                } else {
                    line.matches(',').count() + 1
                }
            })
            .collect()
    };
    let converted = fs::read_to_string(&output).unwrap();
    assert_eq!(shape(content), vec![3, 1, 0, 4, 5, 0, 0]);
    assert_eq!(shape(&converted), shape(content));
}

#[test]
fn blank_lines_in_middle_and_end_are_kept() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "in.csv", "red\n\nblue\n\n");
    let output = dir.path().join("out.csv");

    let summary = transform_file(&Config::new(&input, &output)).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "ff0000\r\n\r\n0000ff\r\n\r\n"
    );
    assert_eq!(summary.rows, 4);
}

#[test]
fn malformed_row_reports_its_line() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.csv");
    fs::write(&input, b"red\n\n\"multi\nline\"\nbl\xffue\n").unwrap();
    let output = dir.path().join("out.csv");

    let err = transform_file(&Config::new(&input, &output)).unwrap_err();

    assert!(
        matches!(err, TransformError::MalformedRow { line: 5, .. }),
        "unexpected error: {err:?}"
    );
}

#[test]
fn missing_input_is_an_input_open_error() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.csv");
    let config = Config::new(dir.path().join("does-not-exist.csv"), &output);

    let err = transform_file(&config).unwrap_err();

    assert!(matches!(err, TransformError::InputOpen { .. }));
    assert!(!output.exists(), "output must not be created");
}

#[test]
fn unwritable_output_is_an_output_open_error() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "in.csv", "red\n");
    let output = dir.path().join("no-such-dir").join("out.csv");

    let err = transform_file(&Config::new(&input, &output)).unwrap_err();

    assert!(matches!(err, TransformError::OutputOpen { .. }));
}

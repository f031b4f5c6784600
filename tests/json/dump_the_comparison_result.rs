use crate::common::command::{compare_with, inserted_line_pair, stdout_of};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use std::path::PathBuf;

#[rstest]
fn dump_the_comparison_result(
    inserted_line_pair: (TempDir, PathBuf, PathBuf),
) -> Result<(), Box<dyn std::error::Error>> {
    let (dir, left, right) = inserted_line_pair;

    let output = stdout_of(&mut compare_with(dir.path(), "json", &left, &right, &[]))?;
    let result: Value = serde_json::from_str(&output)?;

    assert_eq!(
        result["edits"],
        json!([
            { "operation": "equal", "text": "one\n" },
            { "operation": "insert", "text": "two\n" },
            { "operation": "equal", "text": "three\n" },
        ])
    );
    assert_eq!(result["options"]["ignore_case"], json!(false));
    assert_eq!(result["line_map"]["right"], json!({ "0": 0, "1": 1, "2": 1 }));
    assert_eq!(result["line_map"]["left"], json!({ "0": 0, "1": 2 }));

    Ok(())
}

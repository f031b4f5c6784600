use crate::common::command::{compare_with, inserted_line_pair, stdout_of};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;

#[rstest]
fn list_added_lines_on_the_right(
    inserted_line_pair: (TempDir, PathBuf, PathBuf),
) -> Result<(), Box<dyn std::error::Error>> {
    let (dir, left, right) = inserted_line_pair;

    let actual_output = stdout_of(&mut compare_with(
        dir.path(),
        "lines",
        &left,
        &right,
        &["--side", "right"],
    ))?;

    let expected_output = [
        "    1     1  one",
        "    2     2 +two",
        "    3     2  three",
    ]
    .map(|line| format!("{line}\n"))
    .concat();
    assert_eq!(actual_output, expected_output);

    Ok(())
}

use crate::common::command::{compare_with, inserted_line_pair, stdout_of};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;

#[rstest]
fn count_removed_and_added_text(
    inserted_line_pair: (TempDir, PathBuf, PathBuf),
) -> Result<(), Box<dyn std::error::Error>> {
    let (dir, left, right) = inserted_line_pair;

    let actual_output = stdout_of(&mut compare_with(dir.path(), "stat", &left, &right, &[]))?;

    let expected_output = format!(
        "{} -> {}\n0 lines removed, 1 line added\n0 chars deleted, 4 chars inserted in 3 edits\n",
        left.display(),
        right.display()
    );
    assert_eq!(actual_output, expected_output);

    Ok(())
}

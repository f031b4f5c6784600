use crate::common::command::{compare_with, stdout_of, workbench_dir};
use crate::common::file::write_pair;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn ignore_differences_in_whitespace(
    workbench_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let (left, right) = write_pair(
        workbench_dir.path(),
        "md",
        "a  b\tc\n",
        "a b c\n",
    );

    let actual_output = stdout_of(&mut compare_with(
        workbench_dir.path(),
        "diff",
        &left,
        &right,
        &["--ignore-whitespace"],
    ))?;

    assert_eq!(actual_output, "a  b\tc\n");

    Ok(())
}

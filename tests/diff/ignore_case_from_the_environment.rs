use crate::common::command::{compare_with, stdout_of, workbench_dir};
use crate::common::file::write_pair;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("1", "ABC\n")]
#[case("true", "ABC\n")]
#[case("false", "[-ABC-]{+abc+}\n")]
#[case("0", "[-ABC-]{+abc+}\n")]
fn ignore_case_from_the_environment(
    workbench_dir: TempDir,
    #[case] value: &str,
    #[case] expected_output: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let (left, right) = write_pair(workbench_dir.path(), "md", "ABC\n", "abc\n");

    let mut cmd = compare_with(workbench_dir.path(), "diff", &left, &right, &[]);
    cmd.env("DOCDIFF_IGNORE_CASE", value);

    assert_eq!(stdout_of(&mut cmd)?, expected_output);

    Ok(())
}

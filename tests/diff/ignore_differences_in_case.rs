use crate::common::command::{compare_with, stdout_of, workbench_dir};
use crate::common::file::write_pair;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("-i")]
#[case("--ignore-case")]
fn ignore_differences_in_case(
    workbench_dir: TempDir,
    #[case] flag: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let (left, right) = write_pair(workbench_dir.path(), "md", "Hello World\n", "hello world\n");

    let actual_output = stdout_of(&mut compare_with(
        workbench_dir.path(),
        "diff",
        &left,
        &right,
        &[flag],
    ))?;

    // the left document is printed as written
    assert_eq!(actual_output, "Hello World\n");

    Ok(())
}

#[rstest]
fn case_matters_by_default(workbench_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let (left, right) = write_pair(workbench_dir.path(), "md", "Hello\n", "hello\n");

    let actual_output = stdout_of(&mut compare_with(
        workbench_dir.path(),
        "diff",
        &left,
        &right,
        &[],
    ))?;

    assert_eq!(actual_output, "[-H-]{+h+}ello\n");

    Ok(())
}

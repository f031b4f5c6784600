use crate::common::command::{compare_with, stdout_of, workbench_dir};
use crate::common::file::write_pair;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_identical_documents_unchanged(
    workbench_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = "# Title\n\nSame paragraph.\n";
    let (left, right) = write_pair(workbench_dir.path(), "md", text, text);

    let actual_output = stdout_of(&mut compare_with(
        workbench_dir.path(),
        "diff",
        &left,
        &right,
        &[],
    ))?;

    assert_eq!(actual_output, text);

    Ok(())
}

use crate::common::command::{compare_with, stdout_of, workbench_dir};
use crate::common::file::write_pair;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn mark_replaced_words_inline(workbench_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let (left, right) = write_pair(workbench_dir.path(), "md", "hello world", "hello there");

    let actual_output = stdout_of(&mut compare_with(
        workbench_dir.path(),
        "diff",
        &left,
        &right,
        &[],
    ))?;

    assert_eq!(actual_output, "hello [-world-]{+there+}\n");

    Ok(())
}

#[rstest]
fn mark_an_inserted_line(workbench_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let (left, right) = write_pair(
        workbench_dir.path(),
        "md",
        "one\nthree\n",
        "one\ntwo\nthree\n",
    );

    let actual_output = stdout_of(&mut compare_with(
        workbench_dir.path(),
        "diff",
        &left,
        &right,
        &[],
    ))?;

    assert_eq!(actual_output, "one\n{+two\n+}three\n");

    Ok(())
}

use crate::common::command::{compare_with, stdout_of, workbench_dir};
use crate::common::file::write_pair;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn list_deleted_lines_on_the_left(workbench_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let (left, right) = write_pair(
        workbench_dir.path(),
        "md",
        "keep\ndrop this line\nkeep too\n",
        "keep\nkeep too\n",
    );

    let actual_output = stdout_of(&mut compare_with(
        workbench_dir.path(),
        "lines",
        &left,
        &right,
        &[],
    ))?;

    let has_deletion = predicate::str::contains("-drop this line");
    assert!(has_deletion.eval(&actual_output));
    assert!(!actual_output.contains('+'));
    assert_eq!(actual_output.lines().count(), 3);

    Ok(())
}

use crate::common::command::{compare_with, workbench_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_on_a_missing_document(workbench_dir: TempDir) {
    let left = workbench_dir.path().join("left.md");
    write_file(FileSpec::text(left.clone(), "text"));
    let right = workbench_dir.path().join("nowhere.md");

    compare_with(workbench_dir.path(), "diff", &left, &right, &[])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to read"))
        .stderr(predicate::str::contains("nowhere.md"));
}

use crate::common::command::{compare_with, workbench_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_on_a_pdf_without_an_extraction_command(workbench_dir: TempDir) {
    let left = workbench_dir.path().join("left.pdf");
    let right = workbench_dir.path().join("right.md");
    write_file(FileSpec::new(left.clone(), b"%PDF-1.7\nbinary".to_vec()));
    write_file(FileSpec::text(right.clone(), "plain text"));

    compare_with(workbench_dir.path(), "diff", &left, &right, &[])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "failed to extract text from the left document",
        ))
        .stderr(predicate::str::contains("no extraction command is configured"));
}

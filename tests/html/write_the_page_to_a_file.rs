use crate::common::command::{compare_with, inserted_line_pair};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::predicate;
use rstest::rstest;
use std::path::PathBuf;

#[rstest]
fn write_the_page_to_a_file(inserted_line_pair: (TempDir, PathBuf, PathBuf)) {
    let (dir, left, right) = inserted_line_pair;
    let page = dir.child("diff.html");

    compare_with(
        dir.path(),
        "html",
        &left,
        &right,
        &["-o", page.path().to_str().expect("temp path is UTF-8")],
    )
    .assert()
    .success()
    .stdout(predicate::str::is_empty());

    page.assert(predicate::str::contains(
        r#"<span class="diff-addition">two
</span>"#,
    ));
}

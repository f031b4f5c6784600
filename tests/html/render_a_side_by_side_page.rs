use crate::common::command::{compare_with, workbench_dir};
use crate::common::file::write_pair;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn render_a_side_by_side_page(workbench_dir: TempDir) {
    let (left, right) = write_pair(
        workbench_dir.path(),
        "md",
        "a <b> & c\nold\n",
        "a <b> & c\nnew\n",
    );

    compare_with(workbench_dir.path(), "html", &left, &right, &[])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("a &lt;b&gt; &amp; c"))
        .stdout(predicate::str::contains(
            r#"<span class="diff-deletion">old</span>"#,
        ))
        .stdout(predicate::str::contains(
            r#"<span class="diff-addition">new</span>"#,
        ))
        .stdout(predicate::str::contains("left.md"));
}

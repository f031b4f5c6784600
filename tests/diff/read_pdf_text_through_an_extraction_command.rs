use crate::common::command::{compare_with, stdout_of, workbench_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

// `cat` stands in for a real PDF-to-text tool: the "extracted" text is the
// file itself.
#[cfg(unix)]
#[rstest]
fn read_pdf_text_through_an_extraction_command(
    workbench_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let left = workbench_dir.path().join("left.pdf");
    let right = workbench_dir.path().join("right.md");
    write_file(FileSpec::text(left.clone(), "%PDF-1.7 page\n"));
    write_file(FileSpec::text(right.clone(), "%PDF-1.7 page\n"));

    let actual_output = stdout_of(&mut compare_with(
        workbench_dir.path(),
        "diff",
        &left,
        &right,
        &["--extract-with", "cat"],
    ))?;

    assert_eq!(actual_output, "%PDF-1.7 page\n");

    Ok(())
}

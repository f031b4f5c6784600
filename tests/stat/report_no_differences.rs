use crate::common::command::{compare_with, stdout_of, workbench_dir};
use crate::common::file::write_pair;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("same\n", "same\n", &[])]
#[case("Same  text\n", "same text\n", &["-i", "-w"])]
fn report_no_differences(
    workbench_dir: TempDir,
    #[case] left_text: &str,
    #[case] right_text: &str,
    #[case] flags: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    let (left, right) = write_pair(workbench_dir.path(), "txt", left_text, right_text);

    let actual_output = stdout_of(&mut compare_with(
        workbench_dir.path(),
        "stat",
        &left,
        &right,
        flags,
    ))?;

    assert!(actual_output.ends_with("\nno differences\n"));

    Ok(())
}

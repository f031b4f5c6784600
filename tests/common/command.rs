use crate::common::file::write_pair;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

#[fixture]
pub fn workbench_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A left and right document that differ by one inserted line.
#[fixture]
pub fn inserted_line_pair(workbench_dir: TempDir) -> (TempDir, PathBuf, PathBuf) {
    let (left, right) = write_pair(
        workbench_dir.path(),
        "md",
        "one\nthree\n",
        "one\ntwo\nthree\n",
    );
    (workbench_dir, left, right)
}

pub fn run_docdiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("docdiff").expect("Failed to find docdiff binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    for key in [
        "DOCDIFF_IGNORE_CASE",
        "DOCDIFF_IGNORE_WHITESPACE",
        "DOCDIFF_EXTRACTOR",
        "DOCDIFF_TIMEOUT",
    ] {
        cmd.env_remove(key);
    }
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Runs `subcommand` on a pair of files, followed by any extra flags.
pub fn compare_with(
    dir: &Path,
    subcommand: &str,
    left: &Path,
    right: &Path,
    flags: &[&str],
) -> Command {
    let mut cmd = run_docdiff_command(dir, &[subcommand]);
    cmd.arg(left).arg(right);
    for flag in flags {
        cmd.arg(flag);
    }
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> Result<String, Box<dyn std::error::Error>> {
    let assert = cmd.assert().success();
    Ok(String::from_utf8(assert.get_output().stdout.clone())?)
}

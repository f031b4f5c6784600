use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: Vec<u8>,
}

impl FileSpec {
    pub fn text(path: PathBuf, content: &str) -> Self {
        FileSpec::new(path, content.as_bytes().to_vec())
    }
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

/// Writes the two sides of a comparison as `left.<ext>` and `right.<ext>`.
pub fn write_pair(dir: &Path, extension: &str, left: &str, right: &str) -> (PathBuf, PathBuf) {
    let left_path = dir.join(format!("left.{extension}"));
    let right_path = dir.join(format!("right.{extension}"));

    write_file(FileSpec::text(left_path.clone(), left));
    write_file(FileSpec::text(right_path.clone(), right));

    (left_path, right_path)
}

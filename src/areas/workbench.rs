use crate::areas::extraction::DocumentExtractor;
use crate::artifacts::comparison::{Comparator, DiffResult};
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::io::Write;
use std::path::Path;

/// Where comparisons happen: loads documents from disk, runs them through the
/// comparator and owns the writer every command prints to.
pub struct Workbench {
    writer: RefCell<Box<dyn Write>>,
    comparator: Comparator,
    extractor: DocumentExtractor,
    color: bool,
}

impl Workbench {
    pub fn new(
        comparator: Comparator,
        extractor: DocumentExtractor,
        writer: Box<dyn Write>,
    ) -> Self {
        Workbench {
            writer: RefCell::new(writer),
            comparator,
            extractor,
            color: false,
        }
    }

    /// Whether commands may decorate their output with terminal colors.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    /// Reads both files concurrently and compares their extracted text.
    pub async fn compare_files(&self, left: &Path, right: &Path) -> anyhow::Result<DiffResult> {
        let (left_bytes, right_bytes) = tokio::try_join!(read_document(left), read_document(right))?;

        self.comparator
            .compare_documents(&self.extractor, &left_bytes, &right_bytes)
            .await
            .with_context(|| {
                format!(
                    "cannot compare {} with {}",
                    left.display(),
                    right.display()
                )
            })
    }
}

async fn read_document(path: &Path) -> anyhow::Result<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}

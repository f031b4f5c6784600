use crate::areas::extraction::{ExtractError, TextExtractor};
use crate::artifacts::alignment::{AlignedEdit, LineMap, Side, align_lines, project};
use crate::artifacts::diff::{DiffEngine, Edit, Operation};
use crate::artifacts::normalize::{CompareOptions, Normalized};
use crate::artifacts::render::{DiffLine, DiffLineKind, FormattedDiff, format_html, to_diff_lines};
use derive_new::new;
use serde::Serialize;
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("failed to extract text from the {side} document")]
    Extraction {
        side: Side,
        #[source]
        source: ExtractError,
    },
}

/// Everything one comparison produces.
///
/// `edits` is the diff of the normalized texts; `segments` cuts the same
/// script back into the original documents, and the line map and HTML are
/// derived from the segments alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    options: CompareOptions,
    edits: Vec<Edit>,
    segments: Vec<AlignedEdit>,
    formatted: FormattedDiff,
    line_map: LineMap,
}

impl DiffResult {
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn segments(&self) -> &[AlignedEdit] {
        &self.segments
    }

    pub fn formatted(&self) -> &FormattedDiff {
        &self.formatted
    }

    pub fn line_map(&self) -> &LineMap {
        &self.line_map
    }

    pub fn diff_lines(&self, side: Side) -> Vec<DiffLine> {
        to_diff_lines(&self.segments, side, &self.line_map)
    }

    /// True when the documents only differ in what the options ignore.
    pub fn is_identical(&self) -> bool {
        self.edits
            .iter()
            .all(|edit| edit.operation == Operation::Equal)
    }

    pub fn stats(&self) -> DiffStats {
        let chars = |operation: Operation| -> usize {
            self.edits
                .iter()
                .filter(|edit| edit.operation == operation)
                .map(Edit::char_len)
                .sum()
        };
        let lines = |side: Side, kind: DiffLineKind| {
            self.diff_lines(side)
                .iter()
                .filter(|line| line.kind == kind)
                .count()
        };

        DiffStats {
            edits: self.edits.len(),
            deleted_chars: chars(Operation::Delete),
            inserted_chars: chars(Operation::Insert),
            removed_lines: lines(Side::Left, DiffLineKind::Deletion),
            added_lines: lines(Side::Right, DiffLineKind::Addition),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub edits: usize,
    pub deleted_chars: usize,
    pub inserted_chars: usize,
    pub removed_lines: usize,
    pub added_lines: usize,
}

/// Runs the comparison pipeline: normalize, diff, project onto the original
/// texts, then align lines and format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct Comparator {
    options: CompareOptions,
    engine: DiffEngine,
}

impl Comparator {
    pub fn compare(&self, left: &str, right: &str) -> DiffResult {
        let started = Instant::now();
        let left = Normalized::new(left, self.options);
        let right = Normalized::new(right, self.options);

        let edits = self.engine.diff(left.text(), right.text());
        let segments = project(&edits, &left, &right);
        let line_map = align_lines(&segments);
        let formatted = format_html(&segments);

        tracing::debug!(
            edits = edits.len(),
            segments = segments.len(),
            left_lines = line_map.left.len(),
            right_lines = line_map.right.len(),
            elapsed = ?started.elapsed(),
            "compared documents"
        );

        DiffResult {
            options: self.options,
            edits,
            segments,
            formatted,
            line_map,
        }
    }

    /// Extracts text from both documents concurrently, then compares it.
    ///
    /// A failed extraction is an error naming the side, never an empty text.
    pub async fn compare_documents<E: TextExtractor>(
        &self,
        extractor: &E,
        left: &[u8],
        right: &[u8],
    ) -> Result<DiffResult, CompareError> {
        let (left, right) = tokio::join!(extractor.extract(left), extractor.extract(right));
        let left = left.map_err(|source| CompareError::Extraction {
            side: Side::Left,
            source,
        })?;
        let right = right.map_err(|source| CompareError::Extraction {
            side: Side::Right,
            source,
        })?;

        Ok(self.compare(&left, &right))
    }
}

/// Compares two texts with the default diff engine.
pub fn compare(left: &str, right: &str, options: CompareOptions) -> DiffResult {
    Comparator::new(options, DiffEngine::default()).compare(left, right)
}

/// Compares two raw documents with the default diff engine.
pub async fn compare_documents<E: TextExtractor>(
    extractor: &E,
    left: &[u8],
    right: &[u8],
    options: CompareOptions,
) -> Result<DiffResult, CompareError> {
    Comparator::new(options, DiffEngine::default())
        .compare_documents(extractor, left, right)
        .await
}

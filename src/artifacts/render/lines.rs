use crate::artifacts::alignment::{LineMap, Segment, Side, line_breaks};
use crate::artifacts::diff::Operation;
use derive_new::new;
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffLineKind {
    Addition,
    Deletion,
    Context,
}

impl DiffLineKind {
    pub fn marker(&self) -> char {
        match self {
            DiffLineKind::Addition => '+',
            DiffLineKind::Deletion => '-',
            DiffLineKind::Context => ' ',
        }
    }
}

impl From<Operation> for DiffLineKind {
    fn from(operation: Operation) -> Self {
        match operation {
            Operation::Equal => DiffLineKind::Context,
            Operation::Delete => DiffLineKind::Deletion,
            Operation::Insert => DiffLineKind::Addition,
        }
    }
}

/// One row of a per-side, line-oriented view of a diff.
///
/// `line_number` counts lines of this side's own document, and
/// `corresponding_line` is the aligned line in the other document; both are
/// 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct DiffLine {
    pub kind: DiffLineKind,
    #[new(into)]
    pub content: String,
    pub line_number: usize,
    pub corresponding_line: Option<usize>,
}

impl Display for DiffLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let corresponding = self
            .corresponding_line
            .map_or_else(|| "-".to_string(), |line| line.to_string());
        write!(
            f,
            "{:>5} {:>5} {}{}",
            self.line_number,
            corresponding,
            self.kind.marker(),
            self.content
        )
    }
}

/// Splits on `\n`, dropping the empty piece after a trailing line break.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut pieces: Vec<&str> = text.split('\n').collect();
    if pieces.last().is_some_and(|piece| piece.is_empty()) {
        pieces.pop();
    }
    pieces
}

/// Lists the lines of `side`'s document, labelled by how they changed.
///
/// Deletions only show up on the left and additions only on the right;
/// context shows up on both. Line numbers follow the side's own document.
pub fn to_diff_lines<S: Segment>(segments: &[S], side: Side, line_map: &LineMap) -> Vec<DiffLine> {
    let mut lines = Vec::new();
    let mut cursor = 0;

    for segment in segments {
        let text = segment.text_on(side);
        let kind = DiffLineKind::from(segment.operation());

        for (offset, content) in split_lines(text).into_iter().enumerate() {
            let line = cursor + offset;
            let corresponding = line_map.corresponding(side, line).map(|other| other + 1);
            lines.push(DiffLine::new(kind, content, line + 1, corresponding));
        }
        cursor += line_breaks(text);
    }

    lines
}

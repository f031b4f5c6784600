use crate::artifacts::alignment::segment::Segment;
use crate::artifacts::alignment::side::Side;
use crate::artifacts::diff::Operation;
use serde::Serialize;
use std::collections::BTreeMap;

/// 0-based line correspondence between the two documents, in both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineMap {
    pub left: BTreeMap<usize, usize>,
    pub right: BTreeMap<usize, usize>,
}

impl LineMap {
    pub fn side(&self, side: Side) -> &BTreeMap<usize, usize> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// The line of the other document that `line` of `side` lines up with.
    pub fn corresponding(&self, side: Side, line: usize) -> Option<usize> {
        self.side(side).get(&line).copied()
    }

    fn side_mut(&mut self, side: Side) -> &mut BTreeMap<usize, usize> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Records a mapping unless the line already has one; a line maps to
    /// wherever it starts.
    fn record(&mut self, side: Side, line: usize, other: usize) {
        self.side_mut(side).entry(line).or_insert(other);
    }
}

/// Number of lines a piece of text touches; a trailing `\n` does not open a new one.
pub fn touched_lines(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    line_breaks(text) + 1 - usize::from(text.ends_with('\n'))
}

pub fn line_breaks(text: &str) -> usize {
    text.bytes().filter(|&byte| byte == b'\n').count()
}

/// Builds the line map for a segmented pair of documents.
///
/// Both documents are walked with their own line cursor. Lines of an
/// equality map pairwise (clamped to the last line of the shorter side);
/// deleted lines map to the right cursor and inserted lines to the left one,
/// i.e. to where the change sits in the other document. Cursors advance by
/// the number of line breaks consumed, so edits inside a line do not shift
/// the numbering of the lines after it.
pub fn align_lines<S: Segment>(segments: &[S]) -> LineMap {
    let mut map = LineMap::default();
    let (mut left_cursor, mut right_cursor) = (0, 0);

    for segment in segments {
        let left = segment.text_on(Side::Left);
        let right = segment.text_on(Side::Right);

        match segment.operation() {
            Operation::Equal => {
                let (left_lines, right_lines) = (touched_lines(left), touched_lines(right));
                for i in 0..left_lines {
                    let other = right_cursor + i.min(right_lines.saturating_sub(1));
                    map.record(Side::Left, left_cursor + i, other);
                }
                for i in 0..right_lines {
                    let other = left_cursor + i.min(left_lines.saturating_sub(1));
                    map.record(Side::Right, right_cursor + i, other);
                }
            }
            Operation::Delete => {
                for i in 0..touched_lines(left) {
                    map.record(Side::Left, left_cursor + i, right_cursor);
                }
            }
            Operation::Insert => {
                for i in 0..touched_lines(right) {
                    map.record(Side::Right, right_cursor + i, left_cursor);
                }
            }
        }

        left_cursor += line_breaks(left);
        right_cursor += line_breaks(right);
    }

    map
}

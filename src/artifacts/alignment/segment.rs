use crate::artifacts::alignment::side::Side;
use crate::artifacts::diff::{Edit, Operation};
use crate::artifacts::normalize::Normalized;
use derive_new::new;
use serde::Serialize;

/// Anything that splits two documents into aligned, labelled pieces.
///
/// Line alignment and rendering only need to know which operation a piece
/// carries and what text it covers in each document.
pub trait Segment {
    fn operation(&self) -> Operation;

    /// Text this segment covers in the `side` document, empty if none.
    fn text_on(&self, side: Side) -> &str;
}

impl Segment for Edit {
    fn operation(&self) -> Operation {
        self.operation
    }

    fn text_on(&self, side: Side) -> &str {
        if side.owns(self.operation) {
            &self.text
        } else {
            ""
        }
    }
}

/// An edit cut back into the original, un-normalized documents.
///
/// For an `Equal` segment `left` and `right` may differ when the comparison
/// ignored case or whitespace; `Delete` has an empty `right` and `Insert` an
/// empty `left`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct AlignedEdit {
    pub operation: Operation,
    #[new(into)]
    pub left: String,
    #[new(into)]
    pub right: String,
}

impl Segment for AlignedEdit {
    fn operation(&self) -> Operation {
        self.operation
    }

    fn text_on(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

/// Walks a normalized document and hands out the original text behind each
/// run of normalized chars.
struct OriginCursor<'n, 't> {
    normalized: &'n Normalized<'t>,
    position: usize,
    consumed: usize,
}

impl<'n, 't> OriginCursor<'n, 't> {
    fn new(normalized: &'n Normalized<'t>) -> Self {
        OriginCursor {
            normalized,
            position: 0,
            consumed: 0,
        }
    }

    /// Original text up to the start of the char `chars` positions ahead.
    /// Whitespace dropped by normalization sticks to the preceding run.
    fn advance(&mut self, chars: usize) -> &'t str {
        self.position += chars;
        let end = self.normalized.origin(self.position).max(self.consumed);
        let text = &self.normalized.original()[self.consumed..end];
        self.consumed = end;
        text
    }

    fn rest(&self) -> &'t str {
        &self.normalized.original()[self.consumed..]
    }
}

/// Cuts an edit script computed on normalized text back into the original
/// documents.
///
/// The left texts of the result concatenate to `left.original()` and the right
/// texts to `right.original()`. Text of a document no edit touches (one that
/// normalized to nothing) is returned as a trailing `Equal` segment.
pub fn project(edits: &[Edit], left: &Normalized, right: &Normalized) -> Vec<AlignedEdit> {
    let mut left_cursor = OriginCursor::new(left);
    let mut right_cursor = OriginCursor::new(right);
    let mut segments = Vec::with_capacity(edits.len() + 1);

    for edit in edits {
        let chars = edit.char_len();
        let left_text = if Side::Left.owns(edit.operation) {
            left_cursor.advance(chars)
        } else {
            ""
        };
        let right_text = if Side::Right.owns(edit.operation) {
            right_cursor.advance(chars)
        } else {
            ""
        };
        segments.push(AlignedEdit::new(edit.operation, left_text, right_text));
    }

    let (left_rest, right_rest) = (left_cursor.rest(), right_cursor.rest());
    if !left_rest.is_empty() || !right_rest.is_empty() {
        segments.push(AlignedEdit::new(Operation::Equal, left_rest, right_rest));
    }

    segments
}

use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Delete,
    Equal,
    Insert,
}

impl Operation {
    pub fn marker(&self) -> char {
        match self {
            Operation::Delete => '-',
            Operation::Equal => ' ',
            Operation::Insert => '+',
        }
    }
}

/// One contiguous run of characters in an edit script.
///
/// Concatenating the `Delete` and `Equal` texts of a script yields the left
/// document; concatenating the `Equal` and `Insert` texts yields the right one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Edit {
    pub operation: Operation,
    #[new(into)]
    pub text: String,
}

impl Edit {
    pub fn delete(text: impl Into<String>) -> Self {
        Edit::new(Operation::Delete, text)
    }

    pub fn equal(text: impl Into<String>) -> Self {
        Edit::new(Operation::Equal, text)
    }

    pub fn insert(text: impl Into<String>) -> Self {
        Edit::new(Operation::Insert, text)
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn as_string(&self) -> String {
        format!("{}{}", self.operation.marker(), self.text)
    }
}

impl Display for Edit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

/// Run-length edit over two token sequences; `len` tokens are consumed from
/// the left sequence (`Delete`), the right one (`Insert`) or both (`Equal`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Run {
    pub operation: Operation,
    pub len: usize,
}

/// Rebuilds the left document from an edit script.
pub fn left_text(edits: &[Edit]) -> String {
    edits
        .iter()
        .filter(|edit| edit.operation != Operation::Insert)
        .map(|edit| edit.text.as_str())
        .collect()
}

/// Rebuilds the right document from an edit script.
pub fn right_text(edits: &[Edit]) -> String {
    edits
        .iter()
        .filter(|edit| edit.operation != Operation::Delete)
        .map(|edit| edit.text.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Edit::delete("gone"), "-gone")]
    #[case(Edit::insert("new"), "+new")]
    #[case(Edit::equal("same"), " same")]
    fn displays_edit_with_marker(#[case] edit: Edit, #[case] expected: &str) {
        assert_eq!(edit.to_string(), expected);
    }

    #[test]
    fn rebuilds_both_documents() {
        let edits = vec![
            Edit::equal("a\n"),
            Edit::delete("b\n"),
            Edit::insert("x\n"),
            Edit::equal("c"),
        ];

        assert_eq!(left_text(&edits), "a\nb\nc");
        assert_eq!(right_text(&edits), "a\nx\nc");
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(Edit::equal("héllo").char_len(), 5);
    }
}

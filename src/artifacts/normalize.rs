//! Comparison options and text normalization.
//!
//! Normalization keeps track of where every normalized character came from in
//! the original text, so edit scripts computed on normalized text can be cut
//! back into the original documents (see `alignment::project`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// Collapse whitespace runs to a single space and trim both ends.
    /// Whitespace is the Unicode `White_Space` set (`char::is_whitespace`).
    pub ignore_whitespace: bool,
    /// Lower-case both documents before comparing.
    pub ignore_case: bool,
}

/// A normalized document together with its char-to-original mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized<'t> {
    original: &'t str,
    text: String,
    /// Byte offset in `original` of the char each normalized char derives from.
    origins: Vec<usize>,
}

impl<'t> Normalized<'t> {
    pub fn new(original: &'t str, options: CompareOptions) -> Self {
        let mut chars: Vec<(usize, char)> = if options.ignore_case {
            original
                .char_indices()
                .flat_map(|(offset, c)| c.to_lowercase().map(move |lower| (offset, lower)))
                .collect()
        } else {
            original.char_indices().collect()
        };

        if options.ignore_whitespace {
            let mut collapsed: Vec<(usize, char)> = Vec::with_capacity(chars.len());
            for (offset, c) in chars {
                if !c.is_whitespace() {
                    collapsed.push((offset, c));
                } else if collapsed.last().is_none_or(|&(_, last)| last != ' ') {
                    collapsed.push((offset, ' '));
                }
            }

            let start = usize::from(collapsed.first().is_some_and(|&(_, c)| c == ' '));
            let end = collapsed.len() - usize::from(collapsed.last().is_some_and(|&(_, c)| c == ' '));
            chars = collapsed[start..end.max(start)].to_vec();
        }

        let (origins, text) = chars.into_iter().unzip();
        Normalized {
            original,
            text,
            origins,
        }
    }

    pub fn original(&self) -> &'t str {
        self.original
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn char_len(&self) -> usize {
        self.origins.len()
    }

    /// Byte offset in the original text where the normalized char at
    /// `position` starts; one past the last char maps to the end of the original.
    pub fn origin(&self, position: usize) -> usize {
        self.origins
            .get(position)
            .copied()
            .unwrap_or(self.original.len())
    }
}

/// Applies `options` to `text`: case folding first, then whitespace collapsing.
pub fn normalize(text: &str, options: CompareOptions) -> String {
    Normalized::new(text, options).into_text()
}

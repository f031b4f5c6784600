//! Presentation-ready views of a diff
//!
//! - `html`: escaped, highlighted HTML fragments for the two panels
//! - `lines`: GitHub-style per-line records with line numbers

pub mod html;
pub mod lines;

pub use html::{FormattedDiff, escape_html, format_html, standalone_page};
pub use lines::{DiffLine, DiffLineKind, split_lines, to_diff_lines};

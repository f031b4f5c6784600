//! Side-by-side document comparison.
//!
//! Two documents are normalized according to [`CompareOptions`], diffed
//! character by character, and the resulting edit script is projected back
//! onto the original texts to produce highlighted HTML, per-line views and a
//! line map that keeps two rendered panels aligned.
//!
//! ```
//! use docdiff::{CompareOptions, Side, compare};
//!
//! let result = compare("a\nb\nc", "a\nc", CompareOptions::default());
//! assert_eq!(result.line_map().corresponding(Side::Left, 2), Some(1));
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use areas::extraction::{
    CommandExtractor, DocumentExtractor, ExtractError, TextExtractor, Utf8Extractor,
};
pub use areas::workbench::Workbench;
pub use artifacts::alignment::{AlignedEdit, LineMap, Segment, Side, align_lines};
pub use artifacts::comparison::{
    CompareError, Comparator, DiffResult, DiffStats, compare, compare_documents,
};
pub use artifacts::diff::{DiffEngine, Edit, Operation, diff};
pub use artifacts::normalize::{CompareOptions, normalize};
pub use artifacts::render::{DiffLine, DiffLineKind, FormattedDiff, format_html, to_diff_lines};

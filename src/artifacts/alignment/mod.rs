//! Line alignment between the two compared documents
//!
//! - `side`: which document a piece of text belongs to
//! - `segment`: the `Segment` abstraction and the projection of normalized
//!   edits back onto the original documents
//! - `line_map`: the bidirectional line correspondence used to keep two
//!   panels in step

pub mod line_map;
pub mod segment;
pub mod side;

pub use line_map::{LineMap, align_lines, line_breaks, touched_lines};
pub use segment::{AlignedEdit, Segment, project};
pub use side::Side;

//! Porcelain commands (human-facing views of a comparison)
//!
//! ## Commands
//!
//! - `diff`: inline character diff of the two documents
//! - `lines`: numbered per-line view of one side
//! - `html`: side-by-side HTML page
//! - `stat`: summary of what changed

pub mod diff;
pub mod html;
pub mod lines;
pub mod stat;

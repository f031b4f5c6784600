//! Plumbing commands (machine-readable output)
//!
//! - `json`: the complete comparison result, serialized

pub mod json;

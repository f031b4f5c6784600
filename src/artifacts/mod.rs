//! Comparison data structures and algorithms
//!
//! - `normalize`: comparison options and normalization with origin tracking
//! - `diff`: character diff engine (Myers' diff plus semantic cleanup)
//! - `alignment`: projection onto the original texts and line alignment
//! - `render`: HTML and per-line views of a diff
//! - `comparison`: the pipeline tying the above together
//! - `sync`: scroll and height coordination between two panels
//! - `core`: terminal output helpers (pager wrapper, etc.)

pub mod alignment;
pub mod comparison;
pub mod core;
pub mod diff;
pub mod normalize;
pub mod render;
pub mod sync;

//! Stateful collaborators around the comparison pipeline
//!
//! - `extraction`: turning raw document bytes into text
//! - `workbench`: file loading and the shared output writer used by commands

pub mod extraction;
pub mod workbench;

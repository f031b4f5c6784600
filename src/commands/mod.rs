//! Command implementations
//!
//! Every command is an `impl Workbench` block writing to the workbench writer.
//!
//! - `plumbing`: output meant for other programs
//! - `porcelain`: output meant for people

pub mod plumbing;
pub mod porcelain;

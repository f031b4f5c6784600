use crate::artifacts::diff::Operation;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One of the two documents being compared; `Left` is the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Whether text carried by an edit of this kind belongs to this side's document.
    pub fn owns(self, operation: Operation) -> bool {
        matches!(
            (self, operation),
            (_, Operation::Equal) | (Side::Left, Operation::Delete) | (Side::Right, Operation::Insert)
        )
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

//! Coordination between the two rendered panels
//!
//! - `scroll`: relative scroll synchronization with an echo-suppression window
//! - `height`: panel height sharing over a watch channel

pub mod height;
pub mod scroll;

pub use height::{HeightCoordinator, PanelHeights};
pub use scroll::{ScrollPosition, ScrollSync, SyncState};

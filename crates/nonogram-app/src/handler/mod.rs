//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `catalog`: Catalog load transitions
//! - `solve`: Selection and solve transitions, guarded by sequence number
//! - `keys`: Key-to-message mapping

pub(crate) mod catalog;
pub(crate) mod keys;
pub(crate) mod solve;
pub(crate) mod update;


use nonogram_core::PuzzleId;

use crate::message::Message;

pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch the puzzle catalog in the background
    FetchCatalog,

    /// Solve a puzzle in the background
    SolvePuzzle {
        id: PuzzleId,
        /// Sequence number the response must carry back
        seq: u64,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every task checks the shutdown flag before delivering its result, so a
//! response that arrives after teardown never reaches the message channel.

use nonogram_api::PuzzleApi;
use tokio::sync::{mpsc, watch};

use crate::message::Message;
use crate::UpdateAction;

mod catalog;
mod solve;

/// Execute an action by spawning a background task
pub fn handle_action<A>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    shutdown_rx: watch::Receiver<bool>,
    api: &A,
) where
    A: PuzzleApi + Clone + Sync + 'static,
{
    match action {
        UpdateAction::FetchCatalog => {
            catalog::spawn_catalog_fetch(api.clone(), msg_tx, shutdown_rx);
        }

        UpdateAction::SolvePuzzle { id, seq } => {
            solve::spawn_solve(api.clone(), id, seq, msg_tx, shutdown_rx);
        }
    }
}

/// `true` once the engine has been torn down.
fn is_torn_down(shutdown_rx: &watch::Receiver<bool>) -> bool {
    *shutdown_rx.borrow()
}

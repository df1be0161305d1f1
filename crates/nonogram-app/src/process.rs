//! Message processing
//!
//! Runs a message through the TEA update loop and dispatches any resulting
//! actions to background tasks.

use nonogram_api::PuzzleApi;
use tokio::sync::{mpsc, watch};

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    shutdown_rx: &watch::Receiver<bool>,
    api: &A,
) where
    A: PuzzleApi + Clone + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), shutdown_rx.clone(), api);
        }

        msg = result.message;
    }
}

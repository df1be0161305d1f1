//! Solve task

use nonogram_api::PuzzleApi;
use nonogram_core::{PuzzleId, RequestFailure};
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use crate::message::Message;

use super::is_torn_down;

/// Solve `id` and report back under `seq`.
///
/// Superseded requests are not aborted; the handler drops their result.
pub(super) fn spawn_solve<A>(
    api: A,
    id: PuzzleId,
    seq: u64,
    msg_tx: mpsc::Sender<Message>,
    shutdown_rx: watch::Receiver<bool>,
) where
    A: PuzzleApi + Sync + 'static,
{
    tokio::spawn(async move {
        let result = api.solve_builtin(&id).await;

        if is_torn_down(&shutdown_rx) {
            debug!("Discarding solve response for '{}' after teardown", id);
            return;
        }

        let msg = match result {
            Ok(grid) => Message::SolveCompleted { seq, id, grid },
            Err(e) => {
                warn!("Solve of '{}' failed: {}", id, e);
                Message::SolveFailed {
                    seq,
                    id,
                    failure: RequestFailure::from(&e),
                }
            }
        };

        if msg_tx.send(msg).await.is_err() {
            debug!("Message channel closed before solve result was delivered");
        }
    });
}

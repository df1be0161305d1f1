//! Catalog fetch task

use nonogram_api::PuzzleApi;
use nonogram_core::RequestFailure;
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use crate::message::Message;

use super::is_torn_down;

pub(super) fn spawn_catalog_fetch<A>(
    api: A,
    msg_tx: mpsc::Sender<Message>,
    shutdown_rx: watch::Receiver<bool>,
) where
    A: PuzzleApi + Sync + 'static,
{
    tokio::spawn(async move {
        let result = api.fetch_catalog().await;

        if is_torn_down(&shutdown_rx) {
            debug!("Discarding catalog response after teardown");
            return;
        }

        let msg = match result {
            Ok(catalog) => Message::CatalogLoaded { catalog },
            Err(e) => {
                warn!("Catalog fetch failed: {}", e);
                Message::CatalogLoadFailed {
                    failure: RequestFailure::from(&e),
                }
            }
        };

        if msg_tx.send(msg).await.is_err() {
            debug!("Message channel closed before catalog result was delivered");
        }
    });
}

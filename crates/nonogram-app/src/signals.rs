//! OS signals turned into `Message::Quit`

use nonogram_core::prelude::*;
use tokio::sync::{mpsc, watch};

use crate::message::Message;

/// Forward the first SIGINT/SIGTERM (Ctrl-C on Windows) as a quit message.
///
/// The task ends on its own once the engine is torn down.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>, mut shutdown_rx: watch::Receiver<bool>) {
    tokio::spawn(async move {
        tokio::select! {
            received = wait_for_signal() => match received {
                Ok(name) => {
                    info!("{} received, quitting", name);
                    let _ = tx.send(Message::Quit).await;
                }
                Err(e) => error!("Signal handler error: {}", e),
            },
            _ = wait_for_teardown(&mut shutdown_rx) => {
                debug!("Signal handler stopped");
            }
        }
    });
}

async fn wait_for_teardown(shutdown_rx: &mut watch::Receiver<bool>) {
    let _ = shutdown_rx.wait_for(|torn_down| *torn_down).await;
}

/// Resolve with the name of the first termination signal.
async fn wait_for_signal() -> Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())
            .map_err(|e| Error::terminal(format!("cannot listen for SIGINT: {}", e)))?;
        let mut sigterm = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("cannot listen for SIGTERM: {}", e)))?;

        let name = tokio::select! {
            _ = sigint.recv() => "SIGINT",
            _ = sigterm.recv() => "SIGTERM",
        };
        Ok(name)
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("cannot listen for Ctrl+C: {}", e)))?;
        Ok("Ctrl+C")
    }
}

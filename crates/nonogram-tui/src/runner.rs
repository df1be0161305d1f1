//! TUI runner - terminal lifecycle and event loop

use nonogram_api::PuzzleApi;
use nonogram_app::Engine;
use nonogram_core::{Error, Result};
use tracing::{error, info};

use crate::{event, render, terminal};

/// Run the interactive viewer until the user quits.
///
/// Takes ownership of the engine and tears it down on the way out, so
/// requests still in flight never touch state after the terminal closes.
pub async fn run<A>(mut engine: Engine<A>) -> Result<()>
where
    A: PuzzleApi + Clone + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = ratatui::try_init().map_err(Error::terminal_init)?;

    engine.start();
    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    match &result {
        Ok(()) => info!("TUI exited"),
        Err(e) => error!("TUI loop failed: {}", e),
    }
    result
}

/// Main event loop
fn run_loop<A>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<A>) -> Result<()>
where
    A: PuzzleApi + Clone + Sync + 'static,
{
    while !engine.should_quit() {
        // Request results and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}

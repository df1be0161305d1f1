//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the application state, the message channel, the teardown
//! flag and the event broadcaster. Frontends feed it messages and either read
//! `state` directly (TUI) or subscribe to [`EngineEvent`]s (headless).

use nonogram_api::PuzzleApi;
use tokio::sync::{broadcast, mpsc, watch};
use tracing::{debug, info};

use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::{AppState, CatalogPhase, SolvePhase};
use nonogram_core::PuzzleId;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit the matching EngineEvents.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StateSnapshot {
    catalog_phase: CatalogPhase,
    selected: Option<PuzzleId>,
    solve_phase: SolvePhase,
    solve_seq: u64,
    cell_size_px: u16,
    show_clues: bool,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            catalog_phase: state.catalog_phase(),
            selected: state.selected.clone(),
            solve_phase: state.solve_phase(),
            solve_seq: state.solve_tracker.latest(),
            cell_size_px: state.display.cell_size_px(),
            show_clues: state.display.show_clues,
        }
    }
}

/// Orchestration engine for the nonogram viewer.
///
/// Generic over the solving service so tests can drive it with scripted
/// responses.
pub struct Engine<A> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Send `true` to tear down. Background tasks watch the receiver.
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,

    pub settings: Settings,

    api: A,

    /// Whether the automatic catalog load has been started
    started: bool,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl<A> Engine<A>
where
    A: PuzzleApi + Clone + Sync + 'static,
{
    /// Create an engine. Must be called inside a tokio runtime.
    ///
    /// Nothing is fetched until [`Engine::start`].
    pub fn new(settings: Settings, api: A) -> Self {
        let state = AppState::with_settings(&settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (event_tx, _) = broadcast::channel(256);

        signals::spawn_signal_handler(msg_tx.clone(), shutdown_rx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            shutdown_tx,
            shutdown_rx,
            settings,
            api,
            started: false,
            event_tx,
        }
    }

    /// Kick off the automatic catalog load. Later calls do nothing.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        info!("Engine started");
        self.process_message(Message::LoadCatalog);
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped; `broadcast::error::RecvError::Lagged` reports it.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// After teardown every message is dropped, so `state` no longer changes.
    pub fn process_message(&mut self, msg: Message) {
        if !self.is_alive() {
            debug!("Engine torn down, dropping {:?}", msg);
            return;
        }

        let pre = StateSnapshot::capture(&self.state);

        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.shutdown_rx,
            &self.api,
        );

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns `false` once the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// `false` once [`Engine::shutdown`] has run.
    pub fn is_alive(&self) -> bool {
        !*self.shutdown_rx.borrow()
    }

    /// Tear down: notify subscribers and flip the liveness flag.
    ///
    /// In-flight requests are not cancelled; their results are discarded.
    pub fn shutdown(&mut self) {
        if !self.is_alive() {
            return;
        }
        info!("Engine shutting down");
        self.emit(EngineEvent::Shutdown);
        self.shutdown_tx.send_replace(true);
    }

    /// Emit EngineEvents based on state changes after processing.
    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.catalog_phase != post.catalog_phase {
            let puzzles = self
                .state
                .loaded_catalog()
                .map(|catalog| catalog.ids().to_vec())
                .unwrap_or_default();
            self.emit(EngineEvent::CatalogChanged {
                phase: post.catalog_phase,
                puzzles,
                error: self.state.catalog_error().map(|f| f.message.clone()),
            });
        }

        if pre.selected != post.selected {
            self.emit(EngineEvent::SelectionChanged {
                id: post.selected.clone(),
            });
        }

        // A new seq with an unchanged phase is a re-solve
        if pre.solve_phase != post.solve_phase || pre.solve_seq != post.solve_seq {
            self.emit(EngineEvent::SolveChanged {
                id: post.selected.clone(),
                phase: post.solve_phase,
                grid: self.state.solution().cloned(),
                error: self.state.solve_error().map(|f| f.message.clone()),
            });
        }

        if pre.cell_size_px != post.cell_size_px || pre.show_clues != post.show_clues {
            self.emit(EngineEvent::DisplayChanged {
                cell_size_px: post.cell_size_px,
                show_clues: post.show_clues,
            });
        }
    }

    /// send() only fails without receivers, which is fine.
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}

//! Headless mode runner - main event loop without TUI
//!
//! Without a target the runner mirrors engine events until it is told to
//! quit (signal or `quit` on stdin). With a target it selects that puzzle as
//! soon as the catalog is loaded and exits once the solve resolves.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use nonogram_api::PuzzleApi;
use nonogram_app::state::{CatalogPhase, SolvePhase};
use nonogram_app::{Engine, EngineEvent, Message};
use nonogram_core::prelude::*;
use nonogram_core::PuzzleId;
use tokio::sync::broadcast::{self, error::TryRecvError};
use tokio::sync::mpsc;

use super::HeadlessEvent;

/// How a headless run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessExit {
    Success,
    /// The target puzzle could not be listed or solved
    Failure,
}

impl From<HeadlessExit> for ExitCode {
    fn from(exit: HeadlessExit) -> Self {
        match exit {
            HeadlessExit::Success => ExitCode::SUCCESS,
            HeadlessExit::Failure => ExitCode::FAILURE,
        }
    }
}

/// What a target run does after an event
#[derive(Debug, PartialEq, Eq)]
enum TargetStep {
    Wait,
    Select,
    Finish(HeadlessExit),
    Reject(String),
}

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless<A>(mut engine: Engine<A>, target: Option<PuzzleId>) -> Result<HeadlessExit>
where
    A: PuzzleApi + Clone + Sync + 'static,
{
    info!("═══════════════════════════════════════════════════════");
    info!("Nonogram viewer starting in HEADLESS mode");
    if let Some(id) = &target {
        info!("Solve target: {}", id);
    }
    info!("═══════════════════════════════════════════════════════");

    let mut events = engine.subscribe();

    if target.is_none() {
        let stdin_tx = engine.msg_sender();
        std::thread::spawn(move || {
            read_stdin_commands(io::stdin().lock(), stdin_tx);
        });
    }

    let mut stdout = io::stdout();
    let result = headless_event_loop(&mut engine, &mut events, target, &mut stdout).await;

    engine.shutdown();
    write_pending_events(&mut events, &mut stdout)?;

    info!("Nonogram viewer headless mode exiting");
    result
}

/// Main headless event loop
async fn headless_event_loop<A, W>(
    engine: &mut Engine<A>,
    events: &mut broadcast::Receiver<EngineEvent>,
    target: Option<PuzzleId>,
    out: &mut W,
) -> Result<HeadlessExit>
where
    A: PuzzleApi + Clone + Sync + 'static,
    W: Write,
{
    engine.start();

    loop {
        while let Some(event) = next_event(events) {
            HeadlessEvent::from_engine(&event).write_to(out)?;

            let Some(id) = &target else {
                continue;
            };
            match target_step(&event, id) {
                TargetStep::Wait => {}
                TargetStep::Select => {
                    engine.process_message(Message::SelectPuzzle { id: id.clone() })
                }
                TargetStep::Finish(exit) => return Ok(exit),
                TargetStep::Reject(message) => {
                    warn!("{}", message);
                    HeadlessEvent::error(message, true).write_to(out)?;
                    return Ok(HeadlessExit::Failure);
                }
            }
        }

        if engine.should_quit() {
            info!("Quit requested");
            return Ok(HeadlessExit::Success);
        }

        if !engine.process_next().await {
            info!("Message channel closed");
            return Ok(HeadlessExit::Success);
        }
    }
}

/// Next buffered event, skipping over a lag gap.
fn next_event(events: &mut broadcast::Receiver<EngineEvent>) -> Option<EngineEvent> {
    loop {
        match events.try_recv() {
            Ok(event) => return Some(event),
            Err(TryRecvError::Lagged(skipped)) => {
                warn!("Headless output lagged, {} events skipped", skipped);
            }
            Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
        }
    }
}

fn write_pending_events<W: Write>(
    events: &mut broadcast::Receiver<EngineEvent>,
    out: &mut W,
) -> Result<()> {
    while let Some(event) = next_event(events) {
        HeadlessEvent::from_engine(&event).write_to(out)?;
    }
    Ok(())
}

fn target_step(event: &EngineEvent, target: &PuzzleId) -> TargetStep {
    match event {
        EngineEvent::CatalogChanged {
            phase: CatalogPhase::ListLoaded,
            puzzles,
            ..
        } => {
            if puzzles.contains(target) {
                TargetStep::Select
            } else {
                TargetStep::Reject(format!("Unknown puzzle: {}", target))
            }
        }
        EngineEvent::CatalogChanged {
            phase: CatalogPhase::ListFailed,
            ..
        } => TargetStep::Finish(HeadlessExit::Failure),
        EngineEvent::SolveChanged {
            id: Some(id),
            phase,
            ..
        } if id == target => match phase {
            SolvePhase::SolutionReady => TargetStep::Finish(HeadlessExit::Success),
            SolvePhase::SolveFailed => TargetStep::Finish(HeadlessExit::Failure),
            SolvePhase::Idle | SolvePhase::Solving => TargetStep::Wait,
        },
        _ => TargetStep::Wait,
    }
}

/// Read line commands and forward them as messages (blocking).
///
/// `select <id>` / `s <id>`, `retry` / `r`, `quit` / `q`.
fn read_stdin_commands<R: BufRead>(reader: R, msg_tx: mpsc::Sender<Message>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };

        let Some(msg) = parse_command(line.trim()) else {
            continue;
        };
        let quit = matches!(msg, Message::Quit);
        if msg_tx.blocking_send(msg).is_err() || quit {
            break;
        }
    }

    info!("Stdin reader exiting");
}

fn parse_command(line: &str) -> Option<Message> {
    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    };

    match command {
        "" => None,
        "q" | "quit" => Some(Message::Quit),
        "r" | "retry" => Some(Message::RetryCatalog),
        "s" | "select" if !arg.is_empty() => Some(Message::SelectPuzzle {
            id: PuzzleId::new(arg),
        }),
        _ => {
            warn!("Unknown stdin command: {}", line);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nonogram_api::test_utils::{test_catalog, test_grid, FixedPuzzleApi};
    use nonogram_app::config::Settings;
    use serde_json::Value;

    fn lines(out: &[u8]) -> Vec<Value> {
        String::from_utf8_lossy(out)
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    async fn run_target<A>(api: A, target: &str) -> (HeadlessExit, Vec<Value>)
    where
        A: PuzzleApi + Clone + Sync + 'static,
    {
        let mut engine = Engine::new(Settings::default(), api);
        let mut events = engine.subscribe();
        let mut out = Vec::new();

        let exit = headless_event_loop(
            &mut engine,
            &mut events,
            Some(PuzzleId::from(target)),
            &mut out,
        )
        .await
        .unwrap();
        (exit, lines(&out))
    }

    #[tokio::test]
    async fn test_target_solved() {
        let api = FixedPuzzleApi::new(test_catalog(&["p1", "p2"])).with_solution("p2", test_grid(3, 5));
        let (exit, events) = run_target(api, "p2").await;

        assert_eq!(exit, HeadlessExit::Success);
        let last = events.last().unwrap();
        assert_eq!(last["event"], "solve_changed");
        assert_eq!(last["phase"], "solution_ready");
        assert_eq!(last["height"], 3);
        assert_eq!(last["rows"].as_array().unwrap().len(), 3);
        assert!(events
            .iter()
            .any(|e| e["event"] == "selection_changed" && e["id"] == "p2"));
    }

    #[tokio::test]
    async fn test_target_solve_failure_exits_with_failure() {
        let api = FixedPuzzleApi::new(test_catalog(&["p1"]));
        let (exit, events) = run_target(api, "p1").await;

        assert_eq!(exit, HeadlessExit::Failure);
        let last = events.last().unwrap();
        assert_eq!(last["phase"], "solve_failed");
        assert!(last["error"].as_str().unwrap().starts_with("Solve failed: 404"));
    }

    #[tokio::test]
    async fn test_unknown_target_is_rejected() {
        let api = FixedPuzzleApi::new(test_catalog(&["p1"]));
        let (exit, events) = run_target(api, "missing").await;

        assert_eq!(exit, HeadlessExit::Failure);
        let last = events.last().unwrap();
        assert_eq!(last["event"], "error");
        assert_eq!(last["message"], "Unknown puzzle: missing");
    }

    #[tokio::test]
    async fn test_catalog_failure_exits_with_failure() {
        let (exit, events) = run_target(FixedPuzzleApi::failing(), "p1").await;

        assert_eq!(exit, HeadlessExit::Failure);
        assert_eq!(events.last().unwrap()["phase"], "list_failed");
    }

    #[tokio::test]
    async fn test_quit_message_ends_untargeted_run() {
        let api = FixedPuzzleApi::new(test_catalog(&["p1"]));
        let mut engine = Engine::new(Settings::default(), api);
        let mut events = engine.subscribe();
        engine.msg_sender().send(Message::Quit).await.unwrap();

        let mut out = Vec::new();
        let exit = headless_event_loop(&mut engine, &mut events, None, &mut out)
            .await
            .unwrap();

        assert_eq!(exit, HeadlessExit::Success);
        assert!(engine.should_quit());
    }

    #[test]
    fn test_parse_commands() {
        assert!(matches!(parse_command("q"), Some(Message::Quit)));
        assert!(matches!(parse_command("retry"), Some(Message::RetryCatalog)));
        match parse_command("select  my puzzle ") {
            Some(Message::SelectPuzzle { id }) => assert_eq!(id.as_str(), "my puzzle"),
            other => panic!("expected SelectPuzzle, got {other:?}"),
        }
        assert!(parse_command("select").is_none());
        assert!(parse_command("").is_none());
        assert!(parse_command("bogus").is_none());
    }

    #[test]
    fn test_stdin_reader_stops_at_quit() {
        let (tx, mut rx) = mpsc::channel(8);
        read_stdin_commands("s p1\nnope\nq\nr\n".as_bytes(), tx);

        assert!(matches!(rx.try_recv(), Ok(Message::SelectPuzzle { .. })));
        assert!(matches!(rx.try_recv(), Ok(Message::Quit)));
        assert!(rx.try_recv().is_err());
    }
}

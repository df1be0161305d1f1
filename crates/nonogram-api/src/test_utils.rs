//! Test doubles for [`PuzzleApi`]
//!
//! - [`FixedPuzzleApi`] answers immediately from canned data.
//! - [`ScriptedPuzzleApi`] parks every request until the test releases it,
//!   so tests choose the order in which responses arrive.
//! - [`CannedServer`] is a loopback HTTP server for exercising
//!   [`crate::HttpPuzzleApi`] end to end.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use nonogram_core::prelude::*;
use nonogram_core::{PuzzleCatalog, PuzzleId, SolutionGrid};
use tokio::sync::{oneshot, Notify};

use crate::client::PuzzleApi;

/// Grid of the given size with a diagonal stripe, for tests.
pub fn test_grid(height: usize, width: usize) -> SolutionGrid {
    let rows = (0..height)
        .map(|r| (0..width).map(|c| c % height.max(1) == r).collect())
        .collect();
    SolutionGrid::new(height, width, rows).unwrap_or_else(|_| SolutionGrid::blank(height, width))
}

/// Catalog built from string identifiers.
pub fn test_catalog(ids: &[&str]) -> PuzzleCatalog {
    ids.iter().copied().collect()
}

// ─────────────────────────────────────────────────────────────────
// FixedPuzzleApi
// ─────────────────────────────────────────────────────────────────

/// Answers every request immediately.
///
/// A missing catalog answers `500`; an unknown puzzle answers `404`.
#[derive(Debug, Clone, Default)]
pub struct FixedPuzzleApi {
    catalog: Option<PuzzleCatalog>,
    solutions: HashMap<PuzzleId, SolutionGrid>,
}

impl FixedPuzzleApi {
    pub fn new(catalog: PuzzleCatalog) -> Self {
        Self {
            catalog: Some(catalog),
            solutions: HashMap::new(),
        }
    }

    /// A service whose catalog endpoint always fails.
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn with_solution(mut self, id: &str, grid: SolutionGrid) -> Self {
        self.solutions.insert(PuzzleId::from(id), grid);
        self
    }
}

impl PuzzleApi for FixedPuzzleApi {
    async fn fetch_catalog(&self) -> Result<PuzzleCatalog> {
        self.catalog
            .clone()
            .ok_or_else(|| Error::http_status(500, "Failed to load list: 500"))
    }

    async fn solve_builtin(&self, id: &PuzzleId) -> Result<SolutionGrid> {
        self.solutions
            .get(id)
            .cloned()
            .ok_or_else(|| Error::http_status(404, "Solve failed: 404"))
    }
}

// ─────────────────────────────────────────────────────────────────
// ScriptedPuzzleApi
// ─────────────────────────────────────────────────────────────────

type CatalogReply = oneshot::Sender<Result<PuzzleCatalog>>;
type SolveReply = oneshot::Sender<Result<SolutionGrid>>;

#[derive(Default)]
struct Pending {
    catalog: VecDeque<CatalogReply>,
    solves: Vec<(PuzzleId, SolveReply)>,
    catalog_calls: usize,
    solve_calls: Vec<PuzzleId>,
}

/// Parks requests until the test answers them.
///
/// Clones share the same queue, so one clone can be handed to the engine
/// while the test keeps another to drive responses.
#[derive(Clone, Default)]
pub struct ScriptedPuzzleApi {
    pending: Arc<Mutex<Pending>>,
    arrived: Arc<Notify>,
}

impl ScriptedPuzzleApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of catalog requests issued so far.
    pub fn catalog_calls(&self) -> usize {
        self.lock().catalog_calls
    }

    /// Puzzle ids requested so far, in issue order.
    pub fn solve_calls(&self) -> Vec<PuzzleId> {
        self.lock().solve_calls.clone()
    }

    /// Wait until at least `count` catalog requests have been issued.
    pub async fn wait_for_catalog_calls(&self, count: usize) {
        loop {
            let notified = self.arrived.notified();
            if self.catalog_calls() >= count {
                return;
            }
            notified.await;
        }
    }

    /// Wait until at least `count` solve requests have been issued.
    pub async fn wait_for_solve_calls(&self, count: usize) {
        loop {
            let notified = self.arrived.notified();
            if self.lock().solve_calls.len() >= count {
                return;
            }
            notified.await;
        }
    }

    /// Answer the oldest parked catalog request. Returns `false` if none.
    pub fn respond_catalog(&self, result: Result<PuzzleCatalog>) -> bool {
        let reply = self.lock().catalog.pop_front();
        match reply {
            Some(tx) => tx.send(result).is_ok(),
            None => false,
        }
    }

    /// Answer the oldest parked solve request for `id`. Returns `false` if none.
    pub fn respond_solve(&self, id: &str, result: Result<SolutionGrid>) -> bool {
        let id = PuzzleId::from(id);
        let reply = {
            let mut pending = self.lock();
            pending
                .solves
                .iter()
                .position(|(parked, _)| *parked == id)
                .map(|index| pending.solves.remove(index).1)
        };
        match reply {
            Some(tx) => tx.send(result).is_ok(),
            None => false,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Pending> {
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PuzzleApi for ScriptedPuzzleApi {
    async fn fetch_catalog(&self) -> Result<PuzzleCatalog> {
        let (tx, rx) = oneshot::channel();
        {
            let mut pending = self.lock();
            pending.catalog.push_back(tx);
            pending.catalog_calls += 1;
        }
        self.arrived.notify_waiters();
        rx.await
            .unwrap_or_else(|_| Err(Error::network("scripted catalog response dropped")))
    }

    async fn solve_builtin(&self, id: &PuzzleId) -> Result<SolutionGrid> {
        let (tx, rx) = oneshot::channel();
        {
            let mut pending = self.lock();
            pending.solves.push((id.clone(), tx));
            pending.solve_calls.push(id.clone());
        }
        self.arrived.notify_waiters();
        rx.await
            .unwrap_or_else(|_| Err(Error::network("scripted solve response dropped")))
    }
}


// ─────────────────────────────────────────────────────────────────
// CannedServer
// ─────────────────────────────────────────────────────────────────

/// Loopback HTTP/1.1 server answering every request with one fixed response.
///
/// Records the request target (path and query) of each request it reads.
#[derive(Debug, Clone)]
pub struct CannedServer {
    addr: std::net::SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CannedServer {
    /// Bind an ephemeral port and serve `status` with a JSON `body`.
    pub async fn start(status: u16, body: &str) -> std::io::Result<Self> {
        Self::start_raw(format!(
            "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        ))
        .await
    }

    /// Serve `status` with a body that is cut off before its declared length.
    pub async fn start_truncated(status: u16) -> std::io::Result<Self> {
        Self::start_raw(format!(
            "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: 64\r\nConnection: close\r\n\r\n{{\"title\"",
            status
        ))
        .await
    }

    async fn start_raw(response: String) -> std::io::Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = requests.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                serve_one(stream, response.as_bytes(), &recorded).await;
            }
        });

        Ok(Self { addr, requests })
    }

    /// `http://127.0.0.1:{port}/api`
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Request targets seen so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

/// Read one request head, record its target, write `response`, close.
async fn serve_one(
    mut stream: tokio::net::TcpStream,
    response: &[u8],
    requests: &Mutex<Vec<String>>,
) {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => head.extend_from_slice(&chunk[..n]),
        }
    }

    let target = String::from_utf8_lossy(&head)
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1).map(str::to_string));
    if let Some(target) = target {
        requests.lock().unwrap_or_else(|e| e.into_inner()).push(target);
    }

    let _ = stream.write_all(response).await;
    let _ = stream.shutdown().await;
}

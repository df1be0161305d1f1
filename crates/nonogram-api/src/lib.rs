//! # nonogram-api - Solving Service Client
//!
//! HTTP transport between the viewer and the remote nonogram solving service.
//! The solving algorithm itself lives entirely on the service side.
//!
//! Depends on [`nonogram_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Client
//! - [`PuzzleApi`] - Async seam used by the app layer (`Send` futures)
//! - [`HttpPuzzleApi`] - reqwest-based implementation
//! - [`ApiConfig`] - Base URL, catalog route and timeout
//!
//! ### Endpoints
//! - [`ApiEndpoints`] - URL construction with percent-encoded puzzle ids
//! - [`CatalogEndpoint`] - `/builtin/list` or `/puzzles`
//!
//! ### Protocol
//! - [`SolutionDto`] - `{height, width, filled}` wire shape
//! - [`parse_catalog()`], [`parse_solution()`] - Body parsing with validation

pub mod client;
pub mod endpoints;
pub mod protocol;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use client::{ApiConfig, HttpPuzzleApi, LocalPuzzleApi, PuzzleApi, DEFAULT_TIMEOUT};
pub use endpoints::{encode_id, ApiEndpoints, CatalogEndpoint};
pub use protocol::{parse_catalog, parse_problem, parse_solution, ProblemDetail, SolutionDto};

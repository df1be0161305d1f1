//! # nonogram-core - Core Domain Types
//!
//! Foundation crate for the nonogram viewer. Provides domain types, error
//! handling, logging setup, and the pure grid transformations.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Puzzles (`puzzle`)
//! - [`PuzzleId`] - Opaque identifier of a built-in puzzle
//! - [`PuzzleCatalog`] - Server-ordered list of puzzle identifiers
//!
//! ### Grids (`grid`, `clues`)
//! - [`SolutionGrid`] - Shape-checked boolean matrix
//! - [`to_renderable()`] - Row-major flattening into [`RenderCell`]s
//! - [`Clues`] - Row/column run-length clues derived from a grid
//!
//! ### Requests (`request`)
//! - [`RequestState`] - `{Idle, Pending, Succeeded, Failed}` lifecycle
//! - [`RequestFailure`], [`FailureKind`] - User-facing failure description
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use nonogram_core::prelude::*;
//! ```

pub mod clues;
pub mod error;
pub mod grid;
pub mod logging;
pub mod puzzle;
pub mod request;

/// Prelude for common imports used throughout all nonogram viewer crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use clues::{format_clue, line_runs, Clues};
pub use error::{Error, Result};
pub use grid::{renderable_from_parts, to_renderable, RenderCell, SolutionGrid};
pub use puzzle::{PuzzleCatalog, PuzzleId};
pub use request::{FailureKind, RequestFailure, RequestState};

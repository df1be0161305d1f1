//! Wire formats of the solving service
//!
//! `GET /solve/builtin/{id}` answers with `{height, width, filled}`. All three
//! fields are required; a body carrying only `filled` is rejected as
//! malformed rather than guessed at.

use nonogram_core::prelude::*;
use nonogram_core::{PuzzleCatalog, SolutionGrid};
use serde::{Deserialize, Serialize};

/// Solved grid as serialized by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SolutionDto {
    pub height: usize,
    pub width: usize,
    pub filled: Vec<Vec<bool>>,
}

impl SolutionDto {
    /// Convert into a shape-checked grid.
    pub fn into_grid(self) -> Result<SolutionGrid> {
        SolutionGrid::new(self.height, self.width, self.filled)
    }
}

impl From<&SolutionGrid> for SolutionDto {
    fn from(grid: &SolutionGrid) -> Self {
        Self {
            height: grid.height(),
            width: grid.width(),
            filled: grid.rows().to_vec(),
        }
    }
}

/// RFC 7807 problem document returned by the service on validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProblemDetail {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
}

impl ProblemDetail {
    /// `"title: detail"`, or whichever half is present.
    pub fn summary(&self) -> Option<String> {
        let title = self.title.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let detail = self.detail.as_deref().map(str::trim).filter(|s| !s.is_empty());
        match (title, detail) {
            (Some(title), Some(detail)) => Some(format!("{}: {}", title, detail)),
            (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
            (None, None) => None,
        }
    }
}

/// Parse a catalog body: a JSON array of identifier strings.
pub fn parse_catalog(body: &[u8]) -> Result<PuzzleCatalog> {
    serde_json::from_slice(body)
        .map_err(|e| Error::malformed(format!("puzzle list is not a JSON string array: {}", e)))
}

/// Parse and validate a solution body.
pub fn parse_solution(body: &[u8]) -> Result<SolutionGrid> {
    let dto: SolutionDto = serde_json::from_slice(body)
        .map_err(|e| Error::malformed(format!("solution body rejected: {}", e)))?;
    dto.into_grid()
}

/// Extract a problem summary from an error body, if it is one.
pub fn parse_problem(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ProblemDetail>(body)
        .ok()
        .and_then(|problem| problem.summary())
}

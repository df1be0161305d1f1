//! Puzzle identifiers and the built-in puzzle catalog

use serde::{Deserialize, Serialize};

/// Opaque name of a built-in puzzle known to the solving service.
///
/// The identifier is embedded in request paths verbatim; percent-encoding
/// happens at the transport boundary, never here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuzzleId(String);

impl PuzzleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PuzzleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PuzzleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Ordered list of puzzle identifiers as returned by the service.
///
/// Order is the server's order; nothing here sorts or deduplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuzzleCatalog {
    ids: Vec<PuzzleId>,
}

impl PuzzleCatalog {
    pub fn new(ids: Vec<PuzzleId>) -> Self {
        Self { ids }
    }

    pub fn ids(&self) -> &[PuzzleId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PuzzleId> {
        self.ids.get(index)
    }

    pub fn contains(&self, id: &PuzzleId) -> bool {
        self.ids.contains(id)
    }

    /// Index of `id` in catalog order.
    pub fn position(&self, id: &PuzzleId) -> Option<usize> {
        self.ids.iter().position(|candidate| candidate == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PuzzleId> {
        self.ids.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for PuzzleCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(PuzzleId::new).collect())
    }
}

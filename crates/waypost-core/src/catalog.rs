//! Ordered, deduplicated collection of confirmed places for one session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{PlaceCandidate, PlaceDetails};

/// Errors returned by [`Catalog`] index operations.
///
/// An out-of-bounds index is caller misuse (the UI passed a stale position);
/// it fails the operation and nothing else.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("index {index} out of bounds for catalog of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// A confirmed place plus the provenance needed to revisit the decision:
/// the query the user typed and the candidate list that was offered, so
/// disambiguation can be reopened later without another provider search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// The free-text query that produced this entry, trimmed.
    pub query: String,
    /// Candidates offered during resolution, in provider order.
    pub candidates: Vec<PlaceCandidate>,
    /// `place_id` of the currently selected candidate.
    pub selected: String,
    pub details: PlaceDetails,
}

impl CatalogEntry {
    /// Position of the currently selected candidate within `candidates`,
    /// or `None` if the selection came from outside the offered list.
    #[must_use]
    pub fn selected_rank(&self) -> Option<usize> {
        self.candidates
            .iter()
            .position(|c| c.place_id == self.selected)
    }
}

/// Ordered sequence of [`CatalogEntry`]; insertion order is display order.
///
/// No two entries may share a `(name, address)` pair. A single logical actor
/// mutates the catalog, so there is no locking discipline.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `entry` at the end unless a duplicate `(name, address)` pair
    /// already exists. Returns `false` on the duplicate no-op so the caller
    /// can show a notice.
    pub fn append(&mut self, entry: CatalogEntry) -> bool {
        if self
            .entries
            .iter()
            .any(|existing| existing.details.same_place(&entry.details))
        {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Replaces the entry at `index` in place, preserving its position.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::IndexOutOfBounds`] if `index` is past the end.
    pub fn replace_at(&mut self, index: usize, entry: CatalogEntry) -> Result<(), CatalogError> {
        let len = self.entries.len();
        let slot = self
            .entries
            .get_mut(index)
            .ok_or(CatalogError::IndexOutOfBounds { index, len })?;
        *slot = entry;
        Ok(())
    }

    /// Removes and returns the entry at `index`; later entries shift down.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::IndexOutOfBounds`] if `index` is past the end.
    pub fn remove_at(&mut self, index: usize) -> Result<CatalogEntry, CatalogError> {
        let len = self.entries.len();
        if index >= len {
            return Err(CatalogError::IndexOutOfBounds { index, len });
        }
        Ok(self.entries.remove(index))
    }

    /// Empties the catalog unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Read-only snapshot in display order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Domain model shared by the resolver, the catalog, and the CLI.

use serde::{Deserialize, Serialize};

/// One ranked result from a provider search, pending user confirmation.
///
/// `rank` is the 0-based position in the provider's result ordering and is
/// preserved exactly as returned; the provider's relevance ranking is the
/// only ordering the rest of the system ever sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    /// Human-readable disambiguation string, e.g.
    /// `"Eiffel Tower :: Champ de Mars, 5 Av. Anatole France, 75007 Paris, France"`.
    pub label: String,
    /// Opaque provider handle used to fetch full details.
    pub place_id: String,
    pub rank: usize,
}

/// A confirmed, detail-enriched place.
///
/// `name` and `address` are always present. `rating` and `review_count` are
/// `None` when the provider omitted the field — a zero from the provider is a
/// legitimate value and is kept as `Some(0.0)` / `Some(0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub name: String,
    pub address: String,
    pub rating: Option<f64>,
    pub review_count: Option<u64>,
}

impl PlaceDetails {
    /// Identity used for catalog deduplication: two entries are the same
    /// place iff both name and formatted address match exactly.
    #[must_use]
    pub fn same_place(&self, other: &PlaceDetails) -> bool {
        self.name == other.name && self.address == other.address
    }
}

/// Builds the `"name :: address"` display label used for candidate lists.
#[must_use]
pub fn candidate_label(name: &str, address: &str) -> String {
    format!("{name} :: {address}")
}

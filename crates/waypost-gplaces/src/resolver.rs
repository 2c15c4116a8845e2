//! Free-text place resolution with disambiguation.
//!
//! [`Resolver::resolve`] turns one user query into a confirmed place, a
//! short candidate list for the user to pick from, or an explicit not-found.
//! Failures from the provider are returned as-is — nothing in this module
//! retries; whether to try again is a caller decision.

use waypost_core::models::{PlaceCandidate, PlaceDetails};
use waypost_core::DisambiguationPolicy;

use crate::client::PlacesClient;
use crate::error::PlacesError;

/// Upper bound on candidates surfaced for disambiguation. Provider searches
/// can return dozens of matches; past the first few the relevance drops off
/// and the pick list stops being useful.
pub const MAX_CANDIDATES: usize = 5;

/// Outcome of resolving one free-text query.
#[derive(Debug)]
pub enum ResolveOutcome {
    /// An unambiguous (or policy-auto-accepted) match. `candidates` is the
    /// truncated list the match was drawn from, kept so the choice can be
    /// revisited later without a new search.
    Confirmed {
        details: PlaceDetails,
        candidates: Vec<PlaceCandidate>,
    },
    /// Several plausible matches; the caller must have the user pick one and
    /// then call [`Resolver::fetch_details`] with the chosen `place_id`.
    Ambiguous { candidates: Vec<PlaceCandidate> },
    /// Zero results from both the primary search and the fallback
    /// suggestion search.
    NotFound,
}

/// Resolves free-text queries against the places provider.
pub struct Resolver {
    client: PlacesClient,
    policy: DisambiguationPolicy,
}

impl Resolver {
    #[must_use]
    pub fn new(client: PlacesClient, policy: DisambiguationPolicy) -> Self {
        Self { client, policy }
    }

    #[must_use]
    pub fn policy(&self) -> DisambiguationPolicy {
        self.policy
    }

    /// The underlying client, for calls that sit outside the resolution
    /// flow (directions lookups).
    #[must_use]
    pub fn client(&self) -> &PlacesClient {
        &self.client
    }

    /// Resolves a free-text place or address query.
    ///
    /// The query is trimmed first; an empty query short-circuits to
    /// [`ResolveOutcome::NotFound`] without touching the provider. A
    /// non-empty query runs a text search; when that reports zero results
    /// the autocomplete fallback runs, and its suggestions — which are not
    /// confirmed matches — always come back as
    /// [`ResolveOutcome::Ambiguous`]. Candidate lists are truncated to
    /// [`MAX_CANDIDATES`] with the provider's order untouched.
    ///
    /// # Errors
    ///
    /// Any [`PlacesError`] from the provider is surfaced unchanged and
    /// nothing is retried.
    pub async fn resolve(&self, query: &str) -> Result<ResolveOutcome, PlacesError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(ResolveOutcome::NotFound);
        }

        let mut candidates = self.client.text_search(query).await?;
        if candidates.is_empty() {
            tracing::warn!(query, "text search empty, trying autocomplete fallback");
            let mut fallback = self.client.autocomplete(query).await?;
            if fallback.is_empty() {
                return Ok(ResolveOutcome::NotFound);
            }
            fallback.truncate(MAX_CANDIDATES);
            return Ok(ResolveOutcome::Ambiguous {
                candidates: fallback,
            });
        }
        candidates.truncate(MAX_CANDIDATES);

        if candidates.len() > 1 && self.policy == DisambiguationPolicy::AlwaysDisambiguate {
            return Ok(ResolveOutcome::Ambiguous { candidates });
        }

        let details = self.client.place_details(&candidates[0].place_id).await?;
        Ok(ResolveOutcome::Confirmed {
            details,
            candidates,
        })
    }

    /// Resolves a previously-seen candidate identifier into full details.
    ///
    /// Used after the user picks from an [`ResolveOutcome::Ambiguous`] list,
    /// and when swapping a catalog entry for a different kept candidate.
    ///
    /// # Errors
    ///
    /// Any [`PlacesError`] from the provider is surfaced unchanged.
    pub async fn fetch_details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError> {
        self.client.place_details(place_id).await
    }
}

//! Session-scoped state: the catalog plus disambiguations awaiting a pick.
//!
//! The original tools kept this in ambient per-session dictionaries keyed by
//! string; here it is one explicit context object the presentation layer owns
//! and passes into operations.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::models::PlaceCandidate;

/// How the resolution flow treats multiple plausible matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisambiguationPolicy {
    /// Treat the provider's first result as authoritative and confirm it.
    /// The full candidate list is still kept for later review.
    #[default]
    AutoAcceptFirst,
    /// Surface the candidate list whenever more than one match exists.
    AlwaysDisambiguate,
    /// Confirm the first match now; the kept candidate list lets the user
    /// reopen the choice on demand without a new search.
    DisambiguateOnRequest,
}

/// Candidates offered for one query, waiting for the user to pick.
#[derive(Debug, Clone)]
pub struct PendingDisambiguation {
    pub query: String,
    pub candidates: Vec<PlaceCandidate>,
}

/// All mutable state for one interactive session.
///
/// Exactly one logical actor touches this at a time, so plain owned data is
/// enough; nothing here is `Sync` on purpose.
#[derive(Debug, Default)]
pub struct SessionContext {
    pub catalog: Catalog,
    pending: HashMap<String, PendingDisambiguation>,
}

impl SessionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records candidates awaiting a pick for `query` (trimmed). A second
    /// resolve of the same query overwrites the earlier pending set.
    pub fn remember_pending(&mut self, query: &str, candidates: Vec<PlaceCandidate>) {
        let query = query.trim().to_string();
        self.pending.insert(
            query.clone(),
            PendingDisambiguation { query, candidates },
        );
    }

    /// Takes the pending candidates for `query`, removing them from the
    /// session. Returns `None` when nothing is pending for that query.
    pub fn take_pending(&mut self, query: &str) -> Option<PendingDisambiguation> {
        self.pending.remove(query.trim())
    }

    /// Queries that still have a disambiguation waiting, in no particular
    /// order.
    #[must_use]
    pub fn pending_queries(&self) -> Vec<&str> {
        self.pending.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(n: usize) -> Vec<PlaceCandidate> {
        (0..n)
            .map(|rank| PlaceCandidate {
                label: format!("Place {rank} :: {rank} Main St"),
                place_id: format!("id-{rank}"),
                rank,
            })
            .collect()
    }

    #[test]
    fn take_pending_removes_the_entry() {
        let mut session = SessionContext::new();
        session.remember_pending("starbucks", candidates(3));

        let pending = session.take_pending("starbucks").expect("was pending");
        assert_eq!(pending.candidates.len(), 3);
        assert!(session.take_pending("starbucks").is_none());
    }

    #[test]
    fn pending_is_keyed_by_trimmed_query() {
        let mut session = SessionContext::new();
        session.remember_pending("  starbucks  ", candidates(2));
        assert!(session.take_pending("starbucks").is_some());
    }

    #[test]
    fn re_resolving_overwrites_earlier_pending_set() {
        let mut session = SessionContext::new();
        session.remember_pending("cafe", candidates(5));
        session.remember_pending("cafe", candidates(1));

        let pending = session.take_pending("cafe").expect("was pending");
        assert_eq!(pending.candidates.len(), 1);
    }

    #[test]
    fn pending_queries_lists_open_disambiguations() {
        let mut session = SessionContext::new();
        session.remember_pending("a", candidates(2));
        session.remember_pending("b", candidates(2));

        let mut queries = session.pending_queries();
        queries.sort_unstable();
        assert_eq!(queries, vec!["a", "b"]);
    }
}

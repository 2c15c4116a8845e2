//! Normalization of provider wire types into the domain model.
//!
//! This is the only place the field-name differences between the legacy and
//! v1 API generations exist; everything downstream sees [`PlaceCandidate`]
//! and [`PlaceDetails`] only. Absent `rating`/`user_ratings_total` fields
//! stay `None` — a provider zero is a real value and passes through as
//! `Some(0.0)` / `Some(0)`.

use waypost_core::models::{candidate_label, PlaceCandidate, PlaceDetails};

use crate::types::{PlaceDetailsResult, PlaceResource, PlaceSummary, Prediction, Suggestion};

/// Legacy Text Search results, ranked by enumeration order.
#[must_use]
pub fn candidates_from_summaries(summaries: &[PlaceSummary]) -> Vec<PlaceCandidate> {
    summaries
        .iter()
        .enumerate()
        .map(|(rank, place)| PlaceCandidate {
            label: candidate_label(&place.name, &place.formatted_address),
            place_id: place.place_id.clone(),
            rank,
        })
        .collect()
}

/// Legacy autocomplete predictions; the provider's `description` already is
/// a display string, so it becomes the label verbatim.
#[must_use]
pub fn candidates_from_predictions(predictions: &[Prediction]) -> Vec<PlaceCandidate> {
    predictions
        .iter()
        .enumerate()
        .map(|(rank, p)| PlaceCandidate {
            label: p.description.clone(),
            place_id: p.place_id.clone(),
            rank,
        })
        .collect()
}

/// Legacy Place Details payload.
#[must_use]
pub fn details_from_legacy(result: &PlaceDetailsResult) -> PlaceDetails {
    PlaceDetails {
        name: result.name.clone(),
        address: result.formatted_address.clone(),
        rating: result.rating,
        review_count: result.user_ratings_total,
    }
}

/// v1 search results, ranked by enumeration order.
#[must_use]
pub fn candidates_from_places(places: &[PlaceResource]) -> Vec<PlaceCandidate> {
    places
        .iter()
        .enumerate()
        .map(|(rank, place)| PlaceCandidate {
            label: candidate_label(&place.display_name.text, &place.formatted_address),
            place_id: place.id.clone(),
            rank,
        })
        .collect()
}

/// v1 autocomplete suggestions. Suggestions that are not place predictions
/// (the API also emits query predictions) are skipped; ranks stay dense.
#[must_use]
pub fn candidates_from_suggestions(suggestions: &[Suggestion]) -> Vec<PlaceCandidate> {
    suggestions
        .iter()
        .filter_map(|s| s.place_prediction.as_ref())
        .enumerate()
        .map(|(rank, p)| PlaceCandidate {
            label: p.text.text.clone(),
            place_id: p.place_id.clone(),
            rank,
        })
        .collect()
}

/// A v1 place resource, used for both search hits and details calls.
#[must_use]
pub fn details_from_resource(place: &PlaceResource) -> PlaceDetails {
    PlaceDetails {
        name: place.display_name.text.clone(),
        address: place.formatted_address.clone(),
        rating: place.rating,
        review_count: place.user_rating_count,
    }
}

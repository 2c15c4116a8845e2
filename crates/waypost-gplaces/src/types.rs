//! Wire types for the Google Maps Platform web APIs.
//!
//! Two API generations are modelled. The legacy endpoints
//! (`maps.googleapis.com/maps/api/...`) wrap every response in an envelope
//! with a `status` string that must be checked before the payload is
//! trusted. The current v1 endpoints (`places.googleapis.com/v1/...`)
//! return plain camelCase resources and signal failure through HTTP status
//! codes with an `error` body instead.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Legacy: Text Search
// ---------------------------------------------------------------------------

/// Envelope for the legacy Text Search response:
/// `{ "status": "OK", "results": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<PlaceSummary>,
}

/// One ranked place from a legacy Text Search.
#[derive(Debug, Deserialize)]
pub struct PlaceSummary {
    pub name: String,
    pub formatted_address: String,
    pub place_id: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u64>,
}

// ---------------------------------------------------------------------------
// Legacy: Place Details
// ---------------------------------------------------------------------------

/// Envelope for the legacy Place Details response:
/// `{ "status": "OK", "result": { ... } }`.
#[derive(Debug, Deserialize)]
pub struct DetailsEnvelope {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: Option<PlaceDetailsResult>,
}

/// The detail payload requested with the field mask
/// `name,formatted_address,rating,user_ratings_total`.
///
/// `rating` and `user_ratings_total` are omitted by the provider for places
/// with no review data; they must stay distinguishable from a real zero.
#[derive(Debug, Deserialize)]
pub struct PlaceDetailsResult {
    pub name: String,
    pub formatted_address: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u64>,
}

// ---------------------------------------------------------------------------
// Legacy: Autocomplete (fallback suggestion search)
// ---------------------------------------------------------------------------

/// Envelope for the legacy Place Autocomplete response.
#[derive(Debug, Deserialize)]
pub struct AutocompleteEnvelope {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

/// One autocomplete prediction; `description` is already a display string.
#[derive(Debug, Deserialize)]
pub struct Prediction {
    pub description: String,
    pub place_id: String,
}

// ---------------------------------------------------------------------------
// Legacy: Directions
// ---------------------------------------------------------------------------

/// Envelope for the Directions response:
/// `{ "status": "OK", "routes": [ { "legs": [ ... ] } ] }`.
#[derive(Debug, Deserialize)]
pub struct DirectionsEnvelope {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

/// One leg of a route. `duration_in_traffic` is only present when the
/// request carried a departure time and the provider has traffic data.
#[derive(Debug, Deserialize)]
pub struct RouteLeg {
    pub duration: DurationValue,
    #[serde(default)]
    pub duration_in_traffic: Option<DurationValue>,
}

/// A duration as the provider reports it: seconds plus display text.
#[derive(Debug, Deserialize)]
pub struct DurationValue {
    pub text: String,
    /// Seconds.
    pub value: u64,
}

// ---------------------------------------------------------------------------
// Current (v1): Text Search + Place Details
// ---------------------------------------------------------------------------

/// Response body of `POST /v1/places:searchText`.
///
/// The v1 API omits the `places` key entirely for zero results rather than
/// sending an empty array.
#[derive(Debug, Deserialize)]
pub struct SearchTextResponse {
    #[serde(default)]
    pub places: Vec<PlaceResource>,
}

/// A v1 place resource, as returned by both search and details calls under
/// the field mask `id,displayName,formattedAddress,rating,userRatingCount`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceResource {
    pub id: String,
    pub display_name: LocalizedText,
    pub formatted_address: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_rating_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct LocalizedText {
    pub text: String,
}

// ---------------------------------------------------------------------------
// Current (v1): Autocomplete
// ---------------------------------------------------------------------------

/// Response body of `POST /v1/places:autocomplete`.
#[derive(Debug, Deserialize)]
pub struct AutocompleteResponse {
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    #[serde(default)]
    pub place_prediction: Option<PlacePrediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacePrediction {
    pub place_id: String,
    pub text: LocalizedText,
}

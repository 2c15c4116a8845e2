//! HTTP client for the Google Maps Platform web APIs.
//!
//! Wraps `reqwest` with provider-specific error handling, API key management,
//! and typed response deserialization. Legacy endpoints carry a `"status"`
//! field in the JSON envelope which is checked before the payload is parsed;
//! v1 endpoints signal failure through HTTP status codes with an `error`
//! body. Both surface as [`PlacesError::Api`].

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use waypost_core::models::{PlaceCandidate, PlaceDetails};
use waypost_core::PlacesApi;

use crate::error::PlacesError;
use crate::normalize::{
    candidates_from_places, candidates_from_predictions, candidates_from_suggestions,
    candidates_from_summaries, details_from_legacy, details_from_resource,
};
use crate::types::{
    AutocompleteEnvelope, AutocompleteResponse, DetailsEnvelope, PlaceResource, SearchEnvelope,
    SearchTextResponse,
};

const LEGACY_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";
const V1_BASE_URL: &str = "https://places.googleapis.com/";

/// Field mask for legacy Place Details; anything wider is billed higher.
const LEGACY_DETAILS_FIELDS: &str = "name,formatted_address,rating,user_ratings_total";
const V1_SEARCH_FIELD_MASK: &str =
    "places.id,places.displayName,places.formattedAddress,places.rating,places.userRatingCount";
const V1_DETAILS_FIELD_MASK: &str = "id,displayName,formattedAddress,rating,userRatingCount";

/// Client for the Google Maps Platform REST APIs.
///
/// Manages the HTTP client, API key, base URL, response language, and which
/// API generation to speak. Use [`PlacesClient::new`] for production or
/// [`PlacesClient::with_base_url`] to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
    language: String,
    api: PlacesApi,
}

impl PlacesClient {
    /// Creates a new client pointed at the production endpoints for `api`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        timeout_secs: u64,
        language: &str,
        api: PlacesApi,
    ) -> Result<Self, PlacesError> {
        let base = match api {
            PlacesApi::Legacy => LEGACY_BASE_URL,
            PlacesApi::Current => V1_BASE_URL,
        };
        Self::with_base_url(api_key, timeout_secs, language, api, base)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::Api`] if `base_url` is not a
    /// valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        language: &str,
        api: PlacesApi,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("waypost/0.1 (place-resolution)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() appends endpoint paths instead of replacing the last path
        // segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| PlacesError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            language: language.to_owned(),
            api,
        })
    }

    /// Searches for places matching a free-text query.
    ///
    /// Returns normalized candidates in the provider's relevance order, with
    /// ranks assigned from that order. An empty vec means the provider
    /// explicitly reported zero results.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the provider reports an error status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response shape is unexpected.
    pub async fn text_search(&self, query: &str) -> Result<Vec<PlaceCandidate>, PlacesError> {
        tracing::debug!(query, api = %self.api, "text search");
        match self.api {
            PlacesApi::Legacy => {
                let url = self.endpoint_url("place/textsearch/json", &[("query", query)])?;
                let body = self.request_json(&url).await?;
                Self::check_status(&body)?;

                let envelope: SearchEnvelope =
                    serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                        context: format!("textsearch(query={query})"),
                        source: e,
                    })?;

                Ok(candidates_from_summaries(&envelope.results))
            }
            PlacesApi::Current => {
                let url = self.v1_url("v1/places:searchText")?;
                let request = self
                    .client
                    .post(url)
                    .header("X-Goog-Api-Key", &self.api_key)
                    .header("X-Goog-FieldMask", V1_SEARCH_FIELD_MASK)
                    .json(&serde_json::json!({
                        "textQuery": query,
                        "languageCode": self.language,
                    }));
                let body = self.request_json_v1(request).await?;

                let response: SearchTextResponse =
                    serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                        context: format!("places:searchText(query={query})"),
                        source: e,
                    })?;

                Ok(candidates_from_places(&response.places))
            }
        }
    }

    /// Fetches autocomplete suggestions for partial or misspelled input.
    ///
    /// This is the fallback when a text search comes back empty: suggestions
    /// are not confirmed matches, so callers always treat them as candidates
    /// to disambiguate.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the provider reports an error status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response shape is unexpected.
    pub async fn autocomplete(&self, input: &str) -> Result<Vec<PlaceCandidate>, PlacesError> {
        tracing::debug!(input, api = %self.api, "autocomplete");
        match self.api {
            PlacesApi::Legacy => {
                let url = self.endpoint_url("place/autocomplete/json", &[("input", input)])?;
                let body = self.request_json(&url).await?;
                Self::check_status(&body)?;

                let envelope: AutocompleteEnvelope =
                    serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                        context: format!("autocomplete(input={input})"),
                        source: e,
                    })?;

                Ok(candidates_from_predictions(&envelope.predictions))
            }
            PlacesApi::Current => {
                let url = self.v1_url("v1/places:autocomplete")?;
                let request = self
                    .client
                    .post(url)
                    .header("X-Goog-Api-Key", &self.api_key)
                    .json(&serde_json::json!({
                        "input": input,
                        "languageCode": self.language,
                    }));
                let body = self.request_json_v1(request).await?;

                let response: AutocompleteResponse =
                    serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                        context: format!("places:autocomplete(input={input})"),
                        source: e,
                    })?;

                Ok(candidates_from_suggestions(&response.suggestions))
            }
        }
    }

    /// Resolves a place identifier into full details.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the provider reports an error status or no
    ///   details exist for the identifier.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response shape is unexpected.
    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError> {
        tracing::debug!(place_id, api = %self.api, "place details");
        match self.api {
            PlacesApi::Legacy => {
                let url = self.endpoint_url(
                    "place/details/json",
                    &[("place_id", place_id), ("fields", LEGACY_DETAILS_FIELDS)],
                )?;
                let body = self.request_json(&url).await?;
                Self::check_status(&body)?;

                let envelope: DetailsEnvelope =
                    serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                        context: format!("details(place_id={place_id})"),
                        source: e,
                    })?;

                let result = envelope.result.ok_or_else(|| {
                    PlacesError::Api(format!("no details returned for place {place_id}"))
                })?;
                Ok(details_from_legacy(&result))
            }
            PlacesApi::Current => {
                let mut url = self.v1_url(&format!("v1/places/{place_id}"))?;
                url.query_pairs_mut()
                    .append_pair("languageCode", &self.language);
                let request = self
                    .client
                    .get(url)
                    .header("X-Goog-Api-Key", &self.api_key)
                    .header("X-Goog-FieldMask", V1_DETAILS_FIELD_MASK);
                let body = self.request_json_v1(request).await?;

                let place: PlaceResource =
                    serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                        context: format!("places/{place_id}"),
                        source: e,
                    })?;

                Ok(details_from_resource(&place))
            }
        }
    }

    pub(crate) fn api(&self) -> PlacesApi {
        self.api
    }

    /// Builds a legacy endpoint URL with properly percent-encoded query
    /// parameters; `key` and `language` are always appended.
    pub(crate) fn endpoint_url(
        &self,
        path: &str,
        extra: &[(&str, &str)],
    ) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| PlacesError::Api(format!("invalid endpoint path '{path}': {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            pairs.append_pair("language", &self.language);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Builds a v1 endpoint URL. Credentials travel in headers, not the URL.
    fn v1_url(&self, path: &str) -> Result<Url, PlacesError> {
        self.base_url
            .join(path)
            .map_err(|e| PlacesError::Api(format!("invalid endpoint path '{path}': {e}")))
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] on network failure or a non-2xx status.
    /// Returns [`PlacesError::Deserialize`] if the body is not valid JSON.
    pub(crate) async fn request_json(&self, url: &Url) -> Result<serde_json::Value, PlacesError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }

    /// Sends a prepared v1 request and parses the response body as JSON.
    ///
    /// v1 endpoints report failures as HTTP statuses with an `error` body;
    /// when that body is readable its message is surfaced as
    /// [`PlacesError::Api`].
    async fn request_json_v1(
        &self,
        request: RequestBuilder,
    ) -> Result<serde_json::Value, PlacesError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("error")?
                        .get("message")?
                        .as_str()
                        .map(str::to_owned)
                })
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(PlacesError::Api(message));
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: "v1 response".to_string(),
            source: e,
        })
    }

    /// Checks the legacy envelope `"status"` field.
    ///
    /// `OK` and `ZERO_RESULTS` are both success (the latter simply carries an
    /// empty payload); anything else is a provider error, with
    /// `error_message` attached when present. A missing status is left for
    /// the typed parse to report as a shape error.
    pub(crate) fn check_status(body: &serde_json::Value) -> Result<(), PlacesError> {
        let Some(status) = body.get("status").and_then(serde_json::Value::as_str) else {
            return Ok(());
        };
        if status == "OK" || status == "ZERO_RESULTS" {
            return Ok(());
        }
        let message = body
            .get("error_message")
            .and_then(serde_json::Value::as_str);
        Err(PlacesError::Api(match message {
            Some(m) => format!("{status}: {m}"),
            None => status.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> PlacesClient {
        PlacesClient::with_base_url("test-key", 30, "en", PlacesApi::Legacy, base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn endpoint_url_constructs_correct_query_string() {
        let client = test_client("https://maps.googleapis.com/maps/api");
        let url = client
            .endpoint_url("place/textsearch/json", &[("query", "eiffel tower")])
            .expect("static path is valid");
        assert_eq!(
            url.as_str(),
            "https://maps.googleapis.com/maps/api/place/textsearch/json?key=test-key&language=en&query=eiffel+tower"
        );
    }

    #[test]
    fn endpoint_url_normalises_trailing_slash() {
        let client = test_client("https://maps.googleapis.com/maps/api/");
        let url = client
            .endpoint_url("place/details/json", &[("place_id", "abc")])
            .expect("static path is valid");
        assert!(url
            .as_str()
            .starts_with("https://maps.googleapis.com/maps/api/place/details/json?"));
    }

    #[test]
    fn endpoint_url_encodes_special_characters() {
        let client = test_client("https://maps.googleapis.com/maps/api");
        let url = client
            .endpoint_url("place/textsearch/json", &[("query", "fish & chips")])
            .expect("static path is valid");
        assert!(
            url.as_str().contains("fish+%26+chips") || url.as_str().contains("fish%20%26%20chips"),
            "query param should be percent-encoded: {url}"
        );
    }

    #[test]
    fn check_status_accepts_ok_and_zero_results() {
        assert!(PlacesClient::check_status(&serde_json::json!({"status": "OK"})).is_ok());
        assert!(PlacesClient::check_status(&serde_json::json!({"status": "ZERO_RESULTS"})).is_ok());
    }

    #[test]
    fn check_status_surfaces_error_message() {
        let body = serde_json::json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        });
        let err = PlacesClient::check_status(&body).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("REQUEST_DENIED"), "got: {msg}");
        assert!(msg.contains("invalid"), "got: {msg}");
    }

    #[test]
    fn check_status_without_message_reports_bare_status() {
        let body = serde_json::json!({"status": "OVER_QUERY_LIMIT"});
        let err = PlacesClient::check_status(&body).unwrap_err();
        assert!(err.to_string().contains("OVER_QUERY_LIMIT"));
    }

    #[test]
    fn check_status_missing_status_defers_to_typed_parse() {
        assert!(PlacesClient::check_status(&serde_json::json!({"places": []})).is_ok());
    }
}

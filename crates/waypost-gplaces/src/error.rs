use thiserror::Error;

/// Errors returned by the Google Maps Platform client.
///
/// None of these is retried inside this crate; whether to try again is a
/// caller decision.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure, or a non-2xx HTTP status with no readable
    /// provider error body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider signalled failure in-band: a legacy envelope status other
    /// than `OK`/`ZERO_RESULTS`, or a v1 error body. Carries the provider's
    /// message so the UI can display it.
    #[error("places API error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

//! Driving-time lookups via the Directions API.

use chrono::{DateTime, Utc};
use waypost_core::PlacesApi;

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::types::DirectionsEnvelope;

impl PlacesClient {
    /// Computes the driving time in whole minutes between two addresses,
    /// leaving at `departure`.
    ///
    /// Uses `duration_in_traffic` when the provider has live traffic data,
    /// falling back to the static `duration` of the first leg of the first
    /// route. Seconds are rounded to the nearest minute. Returns `None` when
    /// the provider has no route between the points (`ZERO_RESULTS`) or
    /// could not geocode an endpoint (`NOT_FOUND`).
    ///
    /// Only the legacy API generation carries a directions endpoint; the v1
    /// Routes API is a separate product this client does not speak.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the provider reports any other error
    ///   status, or when called on a v1-generation client.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response shape is unexpected.
    pub async fn driving_minutes(
        &self,
        origin: &str,
        destination: &str,
        departure: DateTime<Utc>,
    ) -> Result<Option<u64>, PlacesError> {
        if self.api() == PlacesApi::Current {
            return Err(PlacesError::Api(
                "driving times require the legacy directions endpoint".to_string(),
            ));
        }

        tracing::debug!(origin, destination, "directions");
        let departure_secs = departure.timestamp().max(0).to_string();
        let url = self.endpoint_url(
            "directions/json",
            &[
                ("origin", origin),
                ("destination", destination),
                ("mode", "driving"),
                ("departure_time", &departure_secs),
            ],
        )?;
        let body = self.request_json(&url).await?;

        // No route and un-geocodable endpoints are expected outcomes here,
        // not provider failures.
        if matches!(
            body.get("status").and_then(serde_json::Value::as_str),
            Some("ZERO_RESULTS" | "NOT_FOUND")
        ) {
            return Ok(None);
        }
        Self::check_status(&body)?;

        let envelope: DirectionsEnvelope =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("directions({origin} -> {destination})"),
                source: e,
            })?;

        let Some(leg) = envelope.routes.first().and_then(|r| r.legs.first()) else {
            return Ok(None);
        };
        let seconds = leg
            .duration_in_traffic
            .as_ref()
            .unwrap_or(&leg.duration)
            .value;
        Ok(Some((seconds + 30) / 60))
    }
}

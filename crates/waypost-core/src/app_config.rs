use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which generation of the provider's places API to call.
///
/// The legacy endpoints (`maps.googleapis.com/maps/api/place/...`) and the
/// current v1 endpoints (`places.googleapis.com/v1/...`) return the same
/// information under different field names; the client normalizes both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacesApi {
    Legacy,
    Current,
}

impl fmt::Display for PlacesApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacesApi::Legacy => write!(f, "legacy"),
            PlacesApi::Current => write!(f, "current"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub env: Environment,
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// BCP-47 language code forwarded to every provider call.
    pub language: String,
    pub places_api: PlacesApi,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"[redacted]")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("language", &self.language)
            .field("places_api", &self.places_api)
            .finish()
    }
}

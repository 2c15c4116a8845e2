use thiserror::Error;

use crate::app_config::{AppConfig, Environment, PlacesApi};

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_key = require("GOOGLE_MAPS_API_KEY")?;
    let env = parse_environment(&or_default("WAYPOST_ENV", "development"));
    let log_level = or_default("WAYPOST_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("WAYPOST_REQUEST_TIMEOUT_SECS", "30")?;
    let language = or_default("WAYPOST_LANGUAGE", "en");
    let places_api = parse_places_api(&or_default("WAYPOST_PLACES_API", "legacy"))?;

    Ok(AppConfig {
        api_key,
        env,
        log_level,
        request_timeout_secs,
        language,
        places_api,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

/// Parse a string into a `PlacesApi` variant.
///
/// Unlike the environment, an unknown API generation is rejected: silently
/// falling back would send requests to the wrong endpoint family.
fn parse_places_api(s: &str) -> Result<PlacesApi, ConfigError> {
    match s {
        "legacy" => Ok(PlacesApi::Legacy),
        "current" => Ok(PlacesApi::Current),
        other => Err(ConfigError::InvalidEnvVar {
            var: "WAYPOST_PLACES_API".to_string(),
            reason: format!("expected 'legacy' or 'current', got '{other}'"),
        }),
    }
}

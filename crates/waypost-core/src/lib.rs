pub mod app_config;
pub mod catalog;
pub mod config;
pub mod models;
pub mod session;

pub use app_config::{AppConfig, Environment, PlacesApi};
pub use catalog::{Catalog, CatalogEntry, CatalogError};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use models::{candidate_label, PlaceCandidate, PlaceDetails};
pub use session::{DisambiguationPolicy, PendingDisambiguation, SessionContext};

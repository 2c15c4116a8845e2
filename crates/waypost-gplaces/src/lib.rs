pub mod client;
pub mod directions;
pub mod error;
pub mod normalize;
pub mod resolver;
pub mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use resolver::{ResolveOutcome, Resolver, MAX_CANDIDATES};

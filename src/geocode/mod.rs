/// HTTP client for the geocoding endpoints
pub mod client;

/// Response shapes and query classification
pub mod types;

pub use client::GeocodeClient;
pub use types::{is_zip_query, LocationResult};

//! Location override dialog for the skybar Waybar weather widget.
//!
//! Resolves a user-entered ZIP code or city name into coordinates through
//! the OpenWeatherMap geocoding API, persists the chosen query string to the
//! widget's override file, and signals Waybar to reload.

/// Configuration management
pub mod config;

/// Geocoding resolver
pub mod geocode;

/// The dialog UI
pub mod gui;

/// Status-bar reload signal
pub mod notify;

/// Override file persistence
pub mod store;

/// Utilities
pub mod utils;

// Re-export commonly used types
pub use config::PromptConfig;
pub use geocode::{GeocodeClient, LocationResult};
pub use store::OverrideStore;
pub use utils::{init_logger, PromptError};

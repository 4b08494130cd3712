use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths;

/// Default base URL for the OpenWeatherMap geocoding endpoints.
pub const DEFAULT_GEO_BASE_URL: &str = "https://api.openweathermap.org/geo/1.0";

/// Country suffix appended to bare ZIP codes.
pub const DEFAULT_COUNTRY: &str = "US";

/// Request timeout in seconds for geocoding lookups.
pub const DEFAULT_TIMEOUT_SECS: u64 = 8;

/// Process name of the status bar that reloads on SIGUSR2.
pub const DEFAULT_RELOAD_PROCESS: &str = "waybar";

/// Configuration for the prompt.
///
/// Everything the resolver, store and notifier need is carried here
/// explicitly so tests can substitute endpoints and paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// OpenWeatherMap API key. Normally resolved from the environment or the
    /// key file, but an explicit value in config.toml wins.
    pub api_key: Option<String>,

    /// Base URL of the geocoding API.
    pub geo_base_url: String,

    /// Country appended to ZIP queries that don't carry one.
    pub default_country: String,

    /// Upstream request timeout.
    pub timeout_secs: u64,

    /// Process name signaled after a successful save.
    pub reload_process: String,

    /// Where the chosen query string is persisted.
    #[serde(skip, default = "paths::override_file_path")]
    pub override_path: PathBuf,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            geo_base_url: DEFAULT_GEO_BASE_URL.to_string(),
            default_country: DEFAULT_COUNTRY.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            reload_process: DEFAULT_RELOAD_PROCESS.to_string(),
            override_path: paths::override_file_path(),
        }
    }
}

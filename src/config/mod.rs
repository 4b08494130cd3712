/// Configuration types
pub mod types;

/// Path resolution for cache and config files
pub mod paths;

/// Config file and API key loading
pub mod loader;

pub use loader::{load_api_key, load_api_key_from, load_config, load_config_from_path};
pub use types::PromptConfig;

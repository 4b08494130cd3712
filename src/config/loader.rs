use std::fs;
use std::path::Path;

use super::paths;
use super::types::PromptConfig;
use crate::utils::PromptError;

/// Environment variable holding the OpenWeatherMap API key.
pub const API_KEY_ENV: &str = "OWM_API_KEY";

/// Load configuration from the default location.
///
/// A missing config file yields defaults; a malformed one is a config error.
/// The API key is then resolved from the environment or the key file unless
/// the config file set one explicitly.
pub fn load_config() -> Result<PromptConfig, PromptError> {
    let mut config = match paths::config_file_path() {
        Some(path) if path.exists() => load_config_from_path(&path)?,
        _ => PromptConfig::default(),
    };

    if config.api_key.as_deref().map(str::trim).unwrap_or("").is_empty() {
        config.api_key = load_api_key();
    }

    Ok(config)
}

/// Load configuration from a specific path.
pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> Result<PromptConfig, PromptError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path)
        .map_err(|e| PromptError::Config(format!("Failed to read {}: {}", path.display(), e)))?;

    toml::from_str(&content)
        .map_err(|e| PromptError::Config(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Resolve the API key from OWM_API_KEY, falling back to the key file.
///
/// Blank values count as absent in both sources.
pub fn load_api_key() -> Option<String> {
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.trim().is_empty() {
            return Some(key);
        }
    }

    load_api_key_from(paths::key_file_path()?)
}

/// Read an API key file, treating a missing or blank file as no key.
pub fn load_api_key_from<P: AsRef<Path>>(path: P) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default_country = \"GB\"\ntimeout_secs = 3").unwrap();

        let config = load_config_from_path(file.path()).unwrap();
        assert_eq!(config.default_country, "GB");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn test_load_config_from_missing_path() {
        let result = load_config_from_path("/nonexistent/skybar/config.toml");
        match result {
            Err(PromptError::Config(msg)) => assert!(msg.contains("Failed to read")),
            other => panic!("Expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_config_from_malformed_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = \"not a number\"").unwrap();

        let result = load_config_from_path(file.path());
        match result {
            Err(PromptError::Config(msg)) => assert!(msg.contains("Failed to parse")),
            other => panic!("Expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_api_key_from_env() {
        std::env::set_var(API_KEY_ENV, "test-key-123");
        let key = load_api_key();
        std::env::remove_var(API_KEY_ENV);

        assert_eq!(key.as_deref(), Some("test-key-123"));
    }

    #[test]
    fn test_api_key_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "  file-key-456  ").unwrap();

        assert_eq!(load_api_key_from(file.path()).as_deref(), Some("file-key-456"));
    }

    #[test]
    fn test_blank_key_file_counts_as_absent() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "   ").unwrap();

        assert!(load_api_key_from(file.path()).is_none());
    }

    #[test]
    fn test_missing_key_file_counts_as_absent() {
        assert!(load_api_key_from("/nonexistent/skybar/apikey").is_none());
    }
}

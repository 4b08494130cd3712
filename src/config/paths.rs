use std::path::PathBuf;

/// Directory name shared with the status-bar widget that consumes the
/// override file.
const APP_DIR: &str = "skybar";

/// Name of the file holding the last saved location query.
const OVERRIDE_FILENAME: &str = "location_override";

/// Gets the cache directory for the widget family.
///
/// This will be ~/.cache/skybar on Linux. SKYBAR_CACHE_DIR takes precedence
/// so tests can isolate their filesystem state.
pub fn cache_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SKYBAR_CACHE_DIR") {
        return PathBuf::from(dir);
    }
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Gets the path of the location override file consumed by the widget.
pub fn override_file_path() -> PathBuf {
    cache_dir().join(OVERRIDE_FILENAME)
}

/// Gets the path to the optional config file, ~/.config/skybar/config.toml.
pub fn config_file_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(APP_DIR).join("config.toml"))
}

/// Gets the path to the API key file, ~/.config/skybar/apikey.
pub fn key_file_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(APP_DIR).join("apikey"))
}

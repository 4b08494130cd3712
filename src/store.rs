use std::fs;
use std::path::PathBuf;

use log::info;

use crate::config::PromptConfig;
use crate::utils::PromptError;

/// Persists the last chosen location query for the status-bar widget.
///
/// The file holds exactly the trimmed query text, UTF-8, overwritten on each
/// save. No locking: the widget only ever reads it whole.
pub struct OverrideStore {
    path: PathBuf,
}

impl OverrideStore {
    pub fn new(config: &PromptConfig) -> Self {
        Self {
            path: config.override_path.clone(),
        }
    }

    /// Write the query, creating the cache directory if needed.
    pub fn save(&self, raw_query: &str) -> Result<(), PromptError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, raw_query.trim())?;
        info!("Saved location override to {}", self.path.display());
        Ok(())
    }

    /// Read back the current override, if one has been saved.
    pub fn load(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let trimmed = contents.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_at(dir: &std::path::Path) -> OverrideStore {
        let config = PromptConfig {
            override_path: dir.join("location_override"),
            ..PromptConfig::default()
        };
        OverrideStore::new(&config)
    }

    #[test]
    fn test_save_and_read_back() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path());

        store.save("90210").unwrap();

        let contents = std::fs::read_to_string(dir.path().join("location_override")).unwrap();
        assert_eq!(contents, "90210");
        assert_eq!(store.load().as_deref(), Some("90210"));
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let store = store_at(&dir.path().join("nested").join("cache"));

        store.save("Paris,FR").unwrap();
        assert_eq!(store.load().as_deref(), Some("Paris,FR"));
    }

    #[test]
    fn test_second_save_overwrites() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path());

        store.save("90210").unwrap();
        store.save("Paris,FR").unwrap();

        assert_eq!(store.load().as_deref(), Some("Paris,FR"));
    }

    #[test]
    fn test_save_trims_input() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path());

        store.save("  90210  ").unwrap();
        assert_eq!(store.load().as_deref(), Some("90210"));
    }

    #[test]
    fn test_load_without_file() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path());

        assert!(store.load().is_none());
    }

    #[test]
    fn test_unwritable_path_is_an_io_error() {
        let dir = tempdir().unwrap();
        // Use the directory itself as the file path so the write must fail
        let config = PromptConfig {
            override_path: dir.path().to_path_buf(),
            ..PromptConfig::default()
        };
        let store = OverrideStore::new(&config);

        assert!(matches!(store.save("90210"), Err(PromptError::Io(_))));
    }
}

use crate::{TodoError, TodoResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SEED_TEXT: &str = "Make a to-do list";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Text of the item every session starts with.
    #[serde(default)]
    pub seed_text: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/todo/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("todo/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("todo\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load from the platform config path, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        let Some(config_path) = Self::config_path() else {
            return Self::default();
        };
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", config_path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> TodoResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| TodoError::Config(e.to_string()))
    }

    pub fn effective_seed_text(&self) -> &str {
        self.seed_text.as_deref().unwrap_or(DEFAULT_SEED_TEXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_seed_text() {
        let config = AppConfig::default();
        assert_eq!(config.effective_seed_text(), DEFAULT_SEED_TEXT);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed_text = \"write tests\"").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.effective_seed_text(), "write tests");
    }

    #[test]
    fn test_load_from_empty_file_uses_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed_text = [").unwrap();

        let result = AppConfig::load_from(file.path());
        assert!(matches!(result, Err(TodoError::Config(_))));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(TodoError::Io(_))));
    }
}

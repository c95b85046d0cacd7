//! Grumpy Gordon configuration types and loading

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration
    pub storage: StorageConfig,

    /// Console configuration
    pub ui: UiConfig,
}

/// Config file looked for in the working directory
pub const LOCAL_CONFIG: &str = ".grumpygordon.yml";

impl Config {
    /// Resolve the configuration for this run
    ///
    /// An explicit path must exist and parse. Otherwise the first readable
    /// file from [`Config::search_paths`] wins; broken ones are skipped with a
    /// warning and the built-in defaults cover the rest.
    pub fn load(explicit: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let found = Self::search_paths()
            .into_iter()
            .filter(|path| path.is_file())
            .find_map(|path| match Self::from_file(&path) {
                Ok(config) => Some(config),
                Err(error) => {
                    warn!(path = %path.display(), %error, "Skipping unusable config file");
                    None
                }
            });

        Ok(found.unwrap_or_else(|| {
            debug!("Using built-in config");
            Self::default()
        }))
    }

    /// Candidate config files, most specific first
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("grumpygordon").join("grumpygordon.yml"));
        }
        paths
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).wrap_err_with(|| format!("Can't read {}", path.display()))?;
        let config = serde_yaml::from_str(&content).wrap_err_with(|| format!("{} isn't valid config", path.display()))?;

        debug!(path = %path.display(), "Read config file");
        Ok(config)
    }
}

/// Where tasks are kept
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Task file, relative paths resolve against the working directory
    #[serde(rename = "data-file")]
    pub data_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(crate::DEFAULT_DATA_FILE),
        }
    }
}

/// Console behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Colour error messages (only when stdout is a terminal)
    pub color: bool,

    /// Keep line-editor history in interactive sessions
    pub history: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            history: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.storage.data_file, PathBuf::from("data/grumpygordon.txt"));
        assert!(config.ui.color);
        assert!(config.ui.history);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: Config = serde_yaml::from_str("ui:\n  color: false\n").unwrap();
        assert!(!config.ui.color);
        assert!(config.ui.history);
        assert_eq!(config.storage.data_file, PathBuf::from("data/grumpygordon.txt"));
    }

    #[test]
    fn test_load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gg.yml");
        fs::write(&path, "storage:\n  data-file: /tmp/somewhere/tasks.txt\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.storage.data_file, PathBuf::from("/tmp/somewhere/tasks.txt"));
    }

    #[test]
    fn test_load_explicit_file_errors_are_fatal() {
        let temp = TempDir::new().unwrap();

        let missing = temp.path().join("missing.yml");
        assert!(Config::load(Some(&missing)).is_err());

        let broken = temp.path().join("broken.yml");
        fs::write(&broken, "storage: [not, a, map").unwrap();
        assert!(Config::load(Some(&broken)).is_err());
    }

    #[test]
    fn test_local_file_is_searched_first() {
        let paths = Config::search_paths();
        assert_eq!(paths[0], PathBuf::from(".grumpygordon.yml"));
        assert!(paths.iter().skip(1).all(|p| p.ends_with("grumpygordon/grumpygordon.yml")));
    }

    #[test]
    fn test_explicit_error_names_the_file() {
        let temp = TempDir::new().unwrap();
        let broken = temp.path().join("broken.yml");
        fs::write(&broken, "ui: [oops").unwrap();

        let message = format!("{:#}", Config::load(Some(&broken)).unwrap_err());
        assert!(message.contains("broken.yml"));
    }

    #[test]
    fn test_serde_round_trip_uses_kebab_keys() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(yaml.contains("data-file"));

        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.storage.data_file, Config::default().storage.data_file);
    }
}

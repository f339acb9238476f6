//! CLI configuration file support.
//!
//! Config files only supply defaults; explicit command-line flags always win.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_FOLDS: usize = 2;
pub const DEFAULT_SEED: u64 = 0;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Default number of folds
    #[serde(default)]
    pub folds: Option<usize>,

    /// Default shuffle seed
    #[serde(default)]
    pub seed: Option<u64>,

    /// Log level
    #[serde(default)]
    pub log_level: Option<String>,

    /// Write a fold descriptor alongside the manifests
    #[serde(default)]
    pub write_descriptor: Option<bool>,
}

#[derive(Debug, Error)]
pub enum CliConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to read configuration file: {0}")]
    ReadError(String),

    #[error("Failed to parse configuration file: {0}")]
    ParseError(String),
}

pub type CliConfigResult<T> = std::result::Result<T, CliConfigError>;

impl CliConfig {
    pub fn load_from_file(path: &Path) -> CliConfigResult<Self> {
        if !path.exists() {
            return Err(CliConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| CliConfigError::ReadError(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| CliConfigError::ParseError(format!("{}: {}", path.display(), e)))
    }

    /// `~/.foldsplit/config.toml`
    pub fn default_global_path() -> PathBuf {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".foldsplit")
            .join("config.toml")
    }

    /// `./.foldsplitrc`
    pub fn default_local_path() -> PathBuf {
        PathBuf::from(".foldsplitrc")
    }

    /// Load the global config, then the local one on top of it. Files that
    /// are missing or fail to parse are skipped.
    pub fn discover_and_load() -> Self {
        let mut config = Self::default();

        for path in [Self::default_global_path(), Self::default_local_path()] {
            if let Ok(found) = Self::load_from_file(&path) {
                config.merge(&found);
            }
        }

        config
    }

    /// Values from `other` override values in `self` if they are Some.
    pub fn merge(&mut self, other: &Self) {
        if other.folds.is_some() {
            self.folds = other.folds;
        }
        if other.seed.is_some() {
            self.seed = other.seed;
        }
        if let Some(ref log_level) = other.log_level {
            self.log_level = Some(log_level.clone());
        }
        if other.write_descriptor.is_some() {
            self.write_descriptor = other.write_descriptor;
        }
    }

    pub fn folds_or_default(&self) -> usize {
        self.folds.unwrap_or(DEFAULT_FOLDS)
    }

    pub fn seed_or_default(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    pub fn log_level_or_default(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "folds = 5\nseed = 42\nlog_level = \"debug\"\n").unwrap();

        let config = CliConfig::load_from_file(&config_path).unwrap();
        assert_eq!(config.folds, Some(5));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_level_or_default(), "debug");
        assert_eq!(config.write_descriptor, None);
    }

    #[test]
    fn test_load_missing_and_invalid() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            CliConfig::load_from_file(&temp_dir.path().join("none.toml")),
            Err(CliConfigError::NotFound(_))
        ));

        let bad = temp_dir.path().join("bad.toml");
        std::fs::write(&bad, "folds = \"five\"").unwrap();
        assert!(matches!(CliConfig::load_from_file(&bad), Err(CliConfigError::ParseError(_))));
    }

    #[test]
    fn test_merge() {
        let mut base = CliConfig { folds: Some(3), seed: Some(1), ..Default::default() };
        let local = CliConfig { seed: Some(7), write_descriptor: Some(true), ..Default::default() };
        base.merge(&local);

        assert_eq!(base.folds, Some(3));
        assert_eq!(base.seed, Some(7));
        assert_eq!(base.write_descriptor, Some(true));
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.folds_or_default(), DEFAULT_FOLDS);
        assert_eq!(config.seed_or_default(), DEFAULT_SEED);
        assert_eq!(config.log_level_or_default(), "info");
    }
}

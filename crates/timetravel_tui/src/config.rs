//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use timetravel_tictactoe::ListOrder;
use tracing::{debug, info, instrument};

/// Settings for the terminal front-end.
///
/// Every key is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial move-list order.
    list_order: ListOrder,

    /// Where tracing output goes while the TUI owns the terminal.
    log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_order: ListOrder::default(),
            log_file: PathBuf::from("timetravel_tui.log"),
        }
    }
}

impl Config {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(list_order = %config.list_order, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if given, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(
        mut self,
        list_order: Option<ListOrder>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(order) = list_order {
            self.list_order = order;
        }
        if let Some(file) = log_file {
            self.log_file = file;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_full_file() {
        let file = write_config("list_order = \"descending\"\nlog_file = \"game.log\"\n");
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(*config.list_order(), ListOrder::Descending);
        assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let file = write_config("");
        assert_eq!(Config::from_file(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_bad_order_is_error() {
        let file = write_config("list_order = \"sideways\"\n");
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::load(None)
            .unwrap()
            .with_overrides(Some(ListOrder::Descending), None);
        assert_eq!(*config.list_order(), ListOrder::Descending);
        assert_eq!(config.log_file(), &PathBuf::from("timetravel_tui.log"));
    }
}

// src/config/mod.rs
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::Deserialize;

use crate::error::{Error, Result};

pub const APP_NAME: &str = "rawedit";
pub const LOG_ENV: &str = "RAWEDIT_LOG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    /// Where to log. When unset, a file in the cache directory is used, but only for
    /// levels above `warn`.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.json"))
    }

    /// Reads `path`; a missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(Error::Io(e)),
        };
        Self::parse(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Applies `RAWEDIT_LOG` when it is set.
    pub fn with_env(mut self) -> Self {
        if let Ok(level) = std::env::var(LOG_ENV) {
            self.log_level = level;
        }
        self
    }

    /// The file to log to, if any. With the default `warn` level no file is created
    /// unless `log_file` names one.
    pub fn log_path(&self) -> Option<PathBuf> {
        if self.level_filter() == LevelFilter::Off {
            return None;
        }
        if let Some(path) = &self.log_file {
            return Some(path.clone());
        }
        if self.level_filter() <= LevelFilter::Warn {
            return None;
        }
        dirs::cache_dir().map(|dir| dir.join(APP_NAME).join("rawedit.log"))
    }

    /// Unknown level names fall back to `warn`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Warn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let config = Config::parse(r#"{"log_level":"debug"}"#).unwrap();
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        assert_eq!(config.log_file, Config::default().log_file);
    }

    #[test]
    fn test_default_creates_no_log_file() {
        assert_eq!(Config::default().log_path(), None);
    }

    #[test]
    fn test_explicit_log_file_is_used() {
        let config = Config::parse(r#"{"log_file":"/tmp/rawedit-test.log"}"#).unwrap();
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/rawedit-test.log")));

        let config = Config::parse(r#"{"log_level":"off","log_file":"/tmp/x.log"}"#).unwrap();
        assert_eq!(config.log_path(), None);
    }

    #[test]
    fn test_verbose_level_falls_back_to_cache_dir() {
        let config = Config::parse(r#"{"log_level":"debug"}"#).unwrap();
        assert_eq!(
            config.log_path(),
            dirs::cache_dir().map(|dir| dir.join(APP_NAME).join("rawedit.log"))
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(Config::parse(r#"{"colour":"red"}"#).is_err());
    }

    #[test]
    fn test_level_names() {
        let mut config = Config::default();
        assert_eq!(config.level_filter(), LevelFilter::Warn);
        config.log_level = "OFF".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Off);
        config.log_level = "loud".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Warn);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Config::load(&path), Err(Error::Config { .. })));
    }
}

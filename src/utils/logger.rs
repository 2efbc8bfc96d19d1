// src/utils/logger.rs
use std::fs::{self, File};

use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::Config;

/// Installs a file logger. Stdout and stderr belong to the screen, so nothing is
/// logged there. Returns false when logging stays off.
pub fn init(config: &Config) -> bool {
    let Some(path) = config.log_path() else {
        return false;
    };

    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return false;
        }
    }
    let Ok(file) = File::options().create(true).append(true).open(&path) else {
        return false;
    };

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(config.level_filter(), log_config, file).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_level_installs_nothing() {
        let config = Config {
            log_level: "off".to_string(),
            ..Config::default()
        };
        assert!(!init(&config));
    }

    #[test]
    fn test_default_config_creates_no_file() {
        let config = Config {
            log_level: "warn".to_string(),
            log_file: None,
        };
        assert!(!init(&config));
    }
}

//! Code for loading program settings.
use crate::input::read_toml;
use crate::log::DEFAULT_LOG_LEVEL;
use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Default log level for program
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_write_log_files() -> bool {
    true
}

/// Program settings from config file
#[derive(Debug, Deserialize, PartialEq)]
pub struct Settings {
    /// The default program log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Whether to replace an existing output database
    #[serde(default)]
    pub overwrite: bool,
    /// Whether to write log files alongside the output database
    #[serde(default = "default_write_log_files")]
    pub write_log_files: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            overwrite: false,
            write_log_files: default_write_log_files(),
        }
    }
}

impl Settings {
    /// Read the settings file from the specified directory.
    ///
    /// If the file is not present, default values for settings will be used.
    ///
    /// # Returns
    ///
    /// The program settings as a `Settings` struct or an error if the file is invalid
    pub fn from_path<P: AsRef<Path>>(dir: P) -> Result<Settings> {
        let file_path = dir.as_ref().join(SETTINGS_FILE_NAME);
        if !file_path.is_file() {
            return Ok(Settings::default());
        }

        read_toml(&file_path)
    }
}

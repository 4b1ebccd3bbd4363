//! Configuration for flatfile
//!
//! Centralized configuration with sensible defaults.

use crate::error::{FlatError, Result};
use crate::settings::SettingsIni;
use crate::traits::Settings;

/// Default initial capacity of the line buffer (in bytes)
pub const DEFAULT_BUFFER_CAPACITY: usize = 4096;

/// Largest initial line buffer capacity accepted from a settings file (64 MiB)
pub const MAX_BUFFER_CAPACITY: usize = 64 * 1024 * 1024;

/// Default column delimiter for spreadsheets
pub const DEFAULT_DELIMITER: &str = ",";

/// Section of a settings file read by [`Config::from_settings`]
pub const CONFIG_SECTION: &str = "flatfile";

/// Configuration shared by the stores
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Initial capacity of the line buffer used while loading.
    /// The buffer grows to the longest line encountered.
    pub buffer_capacity: usize,

    /// Column delimiter used by delimited spreadsheets
    pub delimiter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Read a config from the `[flatfile]` section of a settings store
    ///
    /// Recognised keys are `buffer_capacity` and `delimiter`; absent keys
    /// keep their defaults. A capacity above [`MAX_BUFFER_CAPACITY`] is
    /// rejected.
    pub fn from_settings(settings: &SettingsIni) -> Result<Self> {
        let mut config = Config::default();

        match settings.get_uint(CONFIG_SECTION, "buffer_capacity") {
            Ok(Some(capacity)) => {
                config.buffer_capacity = usize::try_from(capacity)
                    .ok()
                    .filter(|&c| c <= MAX_BUFFER_CAPACITY)
                    .ok_or_else(|| {
                        FlatError::invalid_argument(
                            "Config",
                            format!(
                                "buffer_capacity {} exceeds the maximum of {} bytes",
                                capacity, MAX_BUFFER_CAPACITY
                            ),
                        )
                    })?;
            }
            Ok(None) => {}
            Err(e) => {
                return Err(FlatError::invalid_argument("Config", e.to_string()));
            }
        }

        if let Some(delimiter) = settings.get(CONFIG_SECTION, "delimiter") {
            config.delimiter = delimiter.to_string();
        }

        Ok(config)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the initial line buffer capacity (in bytes)
    pub fn buffer_capacity(mut self, capacity: usize) -> Self {
        self.config.buffer_capacity = capacity;
        self
    }

    /// Set the spreadsheet column delimiter
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.config.delimiter = delimiter.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

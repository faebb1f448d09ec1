//! Keyfile Configuration
//!
//! TOML-based configuration for the local API key store.
//! An empty config is valid and yields a store with no key files.
//!
//! # Parsing
//!
//! ```
//! use keyfile_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[keys]\nname_separator = \":\"").unwrap();
//! assert_eq!(config.keys.name_separator, ":");
//! ```

mod error;
mod keys;

use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use error::{ConfigError, Result};
pub use keys::{DEFAULT_NAME_SEPARATOR, KeysConfig};

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API key file settings
    pub keys: KeysConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read, contains invalid TOML,
    /// or fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::io_error(path.display().to_string(), e))?;

        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string
    ///
    /// Prefer using the `FromStr` trait implementation.
    fn parse(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.keys.validate()?;
        Ok(config)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

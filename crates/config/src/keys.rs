//! API key file configuration

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Default separator between service name and API key
pub const DEFAULT_NAME_SEPARATOR: &str = "=";

/// API key file configuration
///
/// # Example
///
/// ```toml
/// [keys]
/// files = ["config/api_keys.conf", "config/partner_keys.conf"]
/// name_separator = ":"
/// diagnostics = true
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeysConfig {
    /// Key files, loaded in order into the same store
    /// Default: none
    pub files: Vec<PathBuf>,

    /// Separator between service name and API key on each line
    /// Default: "="
    pub name_separator: String,

    /// Log warnings for rejected lines
    /// Default: true
    pub diagnostics: bool,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            name_separator: DEFAULT_NAME_SEPARATOR.to_string(),
            diagnostics: true,
        }
    }
}

impl KeysConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.name_separator.is_empty() {
            return Err(ConfigError::invalid_value(
                "keys.name_separator",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KeysConfig::default();
        assert!(config.files.is_empty());
        assert_eq!(config.name_separator, "=");
        assert!(config.diagnostics);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_empty() {
        let config: KeysConfig = toml::from_str("").unwrap();
        assert_eq!(config.name_separator, DEFAULT_NAME_SEPARATOR);
        assert!(config.diagnostics);
    }

    #[test]
    fn test_deserialize_full() {
        let toml = r#"
files = ["/etc/keyfile/internal.conf", "/etc/keyfile/partners.conf"]
name_separator = " => "
diagnostics = false
"#;
        let config: KeysConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            config.files,
            vec![
                PathBuf::from("/etc/keyfile/internal.conf"),
                PathBuf::from("/etc/keyfile/partners.conf"),
            ]
        );
        assert_eq!(config.name_separator, " => ");
        assert!(!config.diagnostics);
    }

    #[test]
    fn test_validation_empty_separator() {
        let config = KeysConfig {
            name_separator: String::new(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("name_separator"));
    }
}

//! Alert Configuration

use crate::alert::{AlertKeys, DEFAULT_KEY_PREFIX};
use crate::error::AlertError;
use crate::style::Style;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Alert configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Session namespace for the alert slots (default: "alert")
    pub key_prefix: String,
    /// Style used by `flash_default` (default: "info")
    pub default_style: String,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            default_style: Style::Info.as_str().to_string(),
        }
    }
}

impl AlertConfig {
    /// Load from a TOML, YAML or JSON file, falling back to defaults for
    /// missing fields. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AlertError> {
        let path = path.as_ref();
        debug!("Loading alert config from {}", path.display());

        let config: Self = ::config::Config::builder()
            .add_source(::config::File::from(path).required(false))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Check the key prefix is usable as a session namespace
    pub fn validate(&self) -> Result<(), AlertError> {
        let prefix = &self.key_prefix;
        if prefix.is_empty() || prefix.ends_with('.') || prefix.chars().any(char::is_whitespace) {
            return Err(AlertError::InvalidKeyPrefix(prefix.clone()));
        }
        Ok(())
    }

    /// Session keys for this namespace
    pub fn keys(&self) -> AlertKeys {
        AlertKeys::with_prefix(&self.key_prefix)
    }
}

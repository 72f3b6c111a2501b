//! Alert Style Tags

use crate::error::AlertError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Presentation category of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl Style {
    /// Tag as stored in the session
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Info => "info",
            Style::Success => "success",
            Style::Warning => "warning",
            Style::Danger => "danger",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = AlertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Style::Info),
            "success" => Ok(Style::Success),
            "warning" => Ok(Style::Warning),
            // "error" is an alias of danger
            "danger" | "error" => Ok(Style::Danger),
            other => Err(AlertError::UnknownStyle(other.to_string())),
        }
    }
}

impl AsRef<str> for Style {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

//! Alert Record and Session Slot Layout

use crate::session::SessionRead;
use crate::style::Style;
use serde::{Deserialize, Serialize};

/// Default session namespace for alert slots
pub const DEFAULT_KEY_PREFIX: &str = "alert";

/// Session keys holding one alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertKeys {
    pub message: String,
    pub style: String,
    pub title: String,
}

impl AlertKeys {
    /// Derive `<prefix>.message`, `<prefix>.style` and `<prefix>.title`
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            message: format!("{prefix}.message"),
            style: format!("{prefix}.style"),
            title: format!("{prefix}.title"),
        }
    }

    /// All three keys, message first
    pub fn all(&self) -> [&str; 3] {
        [self.message.as_str(), self.style.as_str(), self.title.as_str()]
    }
}

impl Default for AlertKeys {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_KEY_PREFIX)
    }
}

/// A single flash alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub message: String,
    /// Style tag, passed through untouched
    pub style: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Alert {
    /// Untitled info alert
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            style: Style::Info.as_str().to_string(),
            title: None,
        }
    }

    pub fn with_style(mut self, style: impl AsRef<str>) -> Self {
        self.style = style.as_ref().to_string();
        self
    }

    /// Set the title; an empty title means none
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = if title.is_empty() { None } else { Some(title) };
        self
    }

    /// Title as written to the session, empty when absent
    pub fn title_str(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Known style tag, if the stored style is one
    pub fn known_style(&self) -> Option<Style> {
        self.style.parse().ok()
    }

    /// Read the live alert back from a session.
    ///
    /// Returns `None` when no message slot is present. A missing style
    /// slot reads as `info`.
    pub fn load<S: SessionRead>(session: &S, keys: &AlertKeys) -> Result<Option<Self>, S::Error> {
        let Some(message) = session.get(&keys.message)? else {
            return Ok(None);
        };
        let style = session
            .get(&keys.style)?
            .unwrap_or_else(|| Style::Info.as_str().to_string());
        let title = session.get(&keys.title)?.filter(|t| !t.is_empty());

        Ok(Some(Self { message, style, title }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemorySession, SessionStore};

    #[test]
    fn test_default_keys() {
        let keys = AlertKeys::default();
        assert_eq!(keys.all(), ["alert.message", "alert.style", "alert.title"]);
    }

    #[test]
    fn test_custom_prefix() {
        let keys = AlertKeys::with_prefix("ui.notice");
        assert_eq!(keys.title, "ui.notice.title");
    }

    #[test]
    fn test_builder() {
        let alert = Alert::new("Saved").with_style(Style::Success).with_title("");
        assert_eq!(alert.style, "success");
        assert_eq!(alert.title, None);
        assert_eq!(alert.known_style(), Some(Style::Success));

        let custom = Alert::new("Hi").with_style("primary");
        assert_eq!(custom.known_style(), None);
    }

    #[test]
    fn test_serialized_shape_omits_missing_title() {
        let alert = Alert::new("Saved");
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Saved", "style": "info"}));

        let titled = Alert::new("Oops").with_style("danger").with_title("Error");
        let json = serde_json::to_value(&titled).unwrap();
        assert_eq!(json["title"], "Error");
    }

    #[test]
    fn test_load_from_session() {
        let keys = AlertKeys::default();
        let mut session = MemorySession::new();
        assert_eq!(Alert::load(&session, &keys).unwrap(), None);

        session.flash("alert.message", "Saved").unwrap();
        let alert = Alert::load(&session, &keys).unwrap().unwrap();
        assert_eq!(alert, Alert::new("Saved"));

        session.flash("alert.style", "warning").unwrap();
        session.flash("alert.title", "Careful").unwrap();
        let alert = Alert::load(&session, &keys).unwrap().unwrap();
        assert_eq!(alert.style, "warning");
        assert_eq!(alert.title_str(), "Careful");
    }
}

//! Alert Manager Implementation

use crate::alert::{Alert, AlertKeys};
use crate::config::AlertConfig;
use crate::error::AlertError;
use crate::session::SessionStore;
use crate::style::Style;
use tracing::{debug, info};

/// Outcome of the last `when` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Condition {
    /// `when` has not been called
    #[default]
    Unset,
    True,
    False,
}

impl From<bool> for Condition {
    fn from(value: bool) -> Self {
        if value {
            Condition::True
        } else {
            Condition::False
        }
    }
}

/// Writes one flash alert into a session.
///
/// The manager owns its session handle `S`; pass `&mut store` to borrow a
/// store the framework owns. Every writing method returns `&mut Self` so
/// calls chain with `?`, and store faults come back unchanged.
///
/// Conditional alerts resolve eagerly: `when(false)` clears the current
/// alert at once, and `otherwise` flashes immediately if the last `when`
/// was false. Calling `otherwise` before any `when` does nothing.
#[derive(Debug)]
pub struct AlertManager<S> {
    /// Session handle
    session: S,
    /// Result of the last `when`
    condition: Condition,
    /// Slot keys
    keys: AlertKeys,
    /// Style used by `flash_default`
    default_style: String,
}

impl<S: SessionStore> AlertManager<S> {
    /// Create a manager writing to the default `alert.*` slots
    pub fn new(session: S) -> Self {
        Self::build(session, &AlertConfig::default())
    }

    /// Create a manager from a validated configuration
    pub fn with_config(session: S, config: &AlertConfig) -> Result<Self, AlertError> {
        config.validate()?;
        Ok(Self::build(session, config))
    }

    fn build(session: S, config: &AlertConfig) -> Self {
        info!("Creating alert manager with config: {:?}", config);
        Self {
            session,
            condition: Condition::Unset,
            keys: config.keys(),
            default_style: config.default_style.clone(),
        }
    }

    /// Flash an alert, replacing any previous one.
    ///
    /// An empty title is never written, and a stale title from an earlier
    /// alert is forgotten.
    pub fn flash(&mut self, message: &str, style: &str, title: &str) -> Result<&mut Self, S::Error> {
        debug!("Flashing {} alert (titled: {})", style, !title.is_empty());

        self.session.flash(&self.keys.message, message)?;
        self.session.flash(&self.keys.style, style)?;
        if title.is_empty() {
            self.session.forget(&self.keys.title)?;
        } else {
            self.session.flash(&self.keys.title, title)?;
        }

        Ok(self)
    }

    /// Flash an untitled alert in the configured default style
    pub fn flash_default(&mut self, message: &str) -> Result<&mut Self, S::Error> {
        let style = self.default_style.clone();
        self.flash(message, &style, "")
    }

    /// Flash a prebuilt alert
    pub fn put(&mut self, alert: &Alert) -> Result<&mut Self, S::Error> {
        self.flash(&alert.message, &alert.style, alert.title_str())
    }

    /// Remove the alert slots, whether or not an alert is present
    pub fn flush(&mut self) -> Result<&mut Self, S::Error> {
        debug!("Flushing alert slots under {}", self.keys.message);
        for key in self.keys.all() {
            self.session.forget(key)?;
        }
        Ok(self)
    }

    /// Record a condition; `false` clears the current alert immediately
    pub fn when(&mut self, condition: bool) -> Result<&mut Self, S::Error> {
        self.condition = Condition::from(condition);
        if self.condition == Condition::False {
            self.flush()?;
        }
        Ok(self)
    }

    /// Flash only if the last `when` was false
    pub fn otherwise(&mut self, message: &str, style: &str, title: &str) -> Result<&mut Self, S::Error> {
        match self.condition {
            Condition::False => self.flash(message, style, title),
            Condition::True | Condition::Unset => {
                debug!("Alert skipped: condition is {:?}", self.condition);
                Ok(self)
            }
        }
    }

    pub fn danger(&mut self, message: &str, title: &str) -> Result<&mut Self, S::Error> {
        self.flash(message, Style::Danger.as_str(), title)
    }

    /// Alias of [`AlertManager::danger`]
    pub fn error(&mut self, message: &str, title: &str) -> Result<&mut Self, S::Error> {
        self.danger(message, title)
    }

    pub fn info(&mut self, message: &str, title: &str) -> Result<&mut Self, S::Error> {
        self.flash(message, Style::Info.as_str(), title)
    }

    pub fn success(&mut self, message: &str, title: &str) -> Result<&mut Self, S::Error> {
        self.flash(message, Style::Success.as_str(), title)
    }

    pub fn warning(&mut self, message: &str, title: &str) -> Result<&mut Self, S::Error> {
        self.flash(message, Style::Warning.as_str(), title)
    }
}

impl<S> AlertManager<S> {
    pub fn condition(&self) -> Condition {
        self.condition
    }

    /// Slot keys this manager writes
    pub fn keys(&self) -> &AlertKeys {
        &self.keys
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    /// Give the session handle back
    pub fn into_inner(self) -> S {
        self.session
    }
}

impl<S: SessionStore + Default> Default for AlertManager<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

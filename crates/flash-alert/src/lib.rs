//! Flash Alerts
//!
//! Stores a single one-shot alert (message, style, optional title) in a web
//! session so it renders on the next request and is then discarded.

mod alert;
mod config;
mod error;
mod manager;
mod session;
mod style;

pub use alert::{Alert, AlertKeys, DEFAULT_KEY_PREFIX};
pub use config::AlertConfig;
pub use error::AlertError;
pub use manager::{AlertManager, Condition};
pub use session::{MemorySession, SessionRead, SessionStore};
pub use style::Style;

//! Session Store Abstraction
//!
//! The alert manager only needs two operations from a session: write a
//! flash value and forget a key. Anything that can do both (a framework
//! session, a cookie jar, a test double) plugs in through [`SessionStore`].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::convert::Infallible;
use tracing::debug;

/// Write side of a session with flash semantics
pub trait SessionStore {
    /// Fault raised by the backing store
    type Error;

    /// Store a value readable through the next request cycle only
    fn flash(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove a key; absent keys are a no-op
    fn forget(&mut self, key: &str) -> Result<(), Self::Error>;
}

/// Read side of a session
pub trait SessionRead {
    type Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;
}

impl<S: SessionStore + ?Sized> SessionStore for &mut S {
    type Error = S::Error;

    fn flash(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).flash(key, value)
    }

    fn forget(&mut self, key: &str) -> Result<(), Self::Error> {
        (**self).forget(key)
    }
}

impl<S: SessionRead + ?Sized> SessionRead for &S {
    type Error = S::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }
}

impl<S: SessionRead + ?Sized> SessionRead for &mut S {
    type Error = S::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }
}

/// In-memory session following the usual web framework flash lifecycle.
///
/// Flashed keys start out "new". At the end of each request the host calls
/// [`MemorySession::age_flash_data`]: keys that were already "old" are
/// dropped and the "new" ones become "old", so a flashed value is visible
/// for exactly one following request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySession {
    /// Stored values
    attributes: BTreeMap<String, String>,
    /// Flash keys written during the current request
    flash_new: BTreeSet<String>,
    /// Flash keys carried over from the previous request
    flash_old: BTreeSet<String>,
}

impl MemorySession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value that survives until explicitly forgotten
    pub fn put(&mut self, key: &str, value: &str) {
        self.attributes.insert(key.to_string(), value.to_string());
    }

    /// Read a value
    pub fn value(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn has(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Stored keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// End-of-request housekeeping: expire old flash data, age the new
    pub fn age_flash_data(&mut self) {
        for key in std::mem::take(&mut self.flash_old) {
            self.attributes.remove(&key);
        }
        self.flash_old = std::mem::take(&mut self.flash_new);
        debug!("Aged flash data: {} key(s) pending expiry", self.flash_old.len());
    }

    /// Keep every flash value for one more request
    pub fn reflash(&mut self) {
        let old = std::mem::take(&mut self.flash_old);
        self.flash_new.extend(old);
    }

    /// Keep the given flash values for one more request
    pub fn keep<'a, I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for key in keys {
            if self.flash_old.remove(key) {
                self.flash_new.insert(key.to_string());
            }
        }
    }
}

impl SessionStore for MemorySession {
    type Error = Infallible;

    fn flash(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.put(key, value);
        self.flash_old.remove(key);
        self.flash_new.insert(key.to_string());
        Ok(())
    }

    fn forget(&mut self, key: &str) -> Result<(), Self::Error> {
        self.attributes.remove(key);
        self.flash_new.remove(key);
        self.flash_old.remove(key);
        Ok(())
    }
}

impl SessionRead for MemorySession {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.attributes.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_survives_one_cycle() {
        let mut session = MemorySession::new();
        session.flash("notice", "saved").unwrap();

        // Rendered on the next request
        session.age_flash_data();
        assert_eq!(session.value("notice"), Some("saved"));

        // Gone on the one after
        session.age_flash_data();
        assert!(!session.has("notice"));
    }

    #[test]
    fn test_put_is_not_flashed() {
        let mut session = MemorySession::new();
        session.put("user", "42");
        session.age_flash_data();
        session.age_flash_data();
        assert_eq!(session.value("user"), Some("42"));
    }

    #[test]
    fn test_reflash_extends_lifetime() {
        let mut session = MemorySession::new();
        session.flash("notice", "saved").unwrap();
        session.age_flash_data();
        session.reflash();
        session.age_flash_data();
        assert_eq!(session.value("notice"), Some("saved"));
        session.age_flash_data();
        assert!(session.is_empty());
    }

    #[test]
    fn test_keep_selected_keys() {
        let mut session = MemorySession::new();
        session.flash("a", "1").unwrap();
        session.flash("b", "2").unwrap();
        session.age_flash_data();
        session.keep(["a"]);
        session.age_flash_data();
        assert_eq!(session.value("a"), Some("1"));
        assert!(!session.has("b"));
    }

    #[test]
    fn test_reflashing_a_key_resets_its_age() {
        let mut session = MemorySession::new();
        session.flash("notice", "first").unwrap();
        session.age_flash_data();
        session.flash("notice", "second").unwrap();
        session.age_flash_data();
        assert_eq!(session.value("notice"), Some("second"));
    }

    #[test]
    fn test_forget_is_idempotent() {
        let mut session = MemorySession::new();
        session.forget("missing").unwrap();
        session.flash("notice", "saved").unwrap();
        session.forget("notice").unwrap();
        session.forget("notice").unwrap();
        assert!(session.is_empty());
    }

    #[test]
    fn test_borrowed_store_forwards() {
        fn write<S: SessionStore>(mut store: S) -> Result<(), S::Error> {
            store.flash("k", "v")
        }

        let mut session = MemorySession::new();
        write(&mut session).unwrap();
        assert_eq!(session.get("k").unwrap(), Some("v".to_string()));
    }
}

//! Typed accessor over the browser's local/session storage.
//!
//! All persisted client state goes through the [`StoreKey`] enumeration;
//! no other module touches `web_sys::Storage` directly. Logic that needs
//! persistence takes a [`KeyValueStore`] so tests can inject the in-memory
//! implementation instead of a real browser store.

use std::cell::RefCell;
use std::collections::HashMap;

/// Which browser store a key lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Survives reloads and restarts.
    Local,
    /// Dies with the tab.
    Session,
}

/// Every key this app ever persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKey {
    /// Bearer token; written at login, cleared at logout.
    AuthToken,
    /// JSON map of position label -> badge color. Cosmetic; concurrent
    /// tabs may race on it, which is tolerated.
    BadgeColors,
    /// Date string of the last day the dashboard reminders were shown.
    RemindersShownOn,
    /// Per-section PIN entered this session; cleared at logout.
    SectionPin(&'static str),
}

impl StoreKey {
    pub fn name(&self) -> String {
        match self {
            StoreKey::AuthToken => "hr_auth_token".to_string(),
            StoreKey::BadgeColors => "hr_badge_colors".to_string(),
            StoreKey::RemindersShownOn => "hr_reminders_shown_on".to_string(),
            StoreKey::SectionPin(section) => format!("hr_section_pin_{}", section),
        }
    }

    pub fn scope(&self) -> Scope {
        match self {
            StoreKey::AuthToken | StoreKey::BadgeColors => Scope::Local,
            StoreKey::RemindersShownOn | StoreKey::SectionPin(_) => Scope::Session,
        }
    }
}

/// Minimal string key-value store surface.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Backed by `window.localStorage` / `window.sessionStorage`. Every
/// operation degrades to a no-op when the store is unavailable (private
/// browsing, quota), matching how the rest of the app treats storage as
/// best-effort.
pub struct BrowserStore {
    scope: Scope,
}

impl BrowserStore {
    pub fn new(scope: Scope) -> Self {
        Self { scope }
    }

    fn raw(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.scope {
            Scope::Local => window.local_storage().ok()?,
            Scope::Session => window.session_storage().ok()?,
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.raw()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.raw() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.raw() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Test double.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

fn store_for(key: StoreKey) -> BrowserStore {
    BrowserStore::new(key.scope())
}

pub fn get(key: StoreKey) -> Option<String> {
    store_for(key).get(&key.name())
}

pub fn set(key: StoreKey, value: &str) {
    store_for(key).set(&key.name(), value);
}

pub fn remove(key: StoreKey) {
    store_for(key).remove(&key.name());
}

pub fn auth_token() -> Option<String> {
    get(StoreKey::AuthToken)
}

/// Section PINs known at compile time; enumerated so logout can sweep
/// them all.
pub const PIN_SECTIONS: &[&str] = &["salary", "evaluations"];

/// Logout boundary: drop the token and every transient section PIN.
pub fn clear_auth_state() {
    remove(StoreKey::AuthToken);
    for section in PIN_SECTIONS {
        remove(StoreKey::SectionPin(section));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_stable_and_disjoint() {
        let names = [
            StoreKey::AuthToken.name(),
            StoreKey::BadgeColors.name(),
            StoreKey::RemindersShownOn.name(),
            StoreKey::SectionPin("salary").name(),
            StoreKey::SectionPin("evaluations").name(),
        ];
        for (i, a) in names.iter().enumerate() {
            for b in names.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v");
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.remove("k");
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn token_lives_in_local_pins_in_session() {
        assert_eq!(StoreKey::AuthToken.scope(), Scope::Local);
        assert_eq!(StoreKey::SectionPin("salary").scope(), Scope::Session);
        assert_eq!(StoreKey::RemindersShownOn.scope(), Scope::Session);
    }
}

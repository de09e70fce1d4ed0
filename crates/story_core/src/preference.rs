//! Glue between the search query and a persistent key-value store.
//!
//! Persisting follows a two-phase init: [`LoadedPreference::load`] reads
//! the stored value once and has no way to write. Only after
//! [`LoadedPreference::arm`] does the returned [`ArmedPreference`] write
//! changes back, so the freshly loaded value is never written over with
//! itself on the first cycle.

use std::collections::HashMap;

/// Storage key for the last submitted query.
pub const SEARCH_KEY: &str = "search";
/// Query used when nothing usable is stored.
pub const DEFAULT_QUERY: &str = "React";

/// A store of named string values that survives restarts.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

/// In-memory store; nothing outlives the process.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Reads `key`, falling back when the value is absent or empty.
pub fn load_query(store: &dyn PreferenceStore, key: &str, fallback: &str) -> String {
    store
        .get(key)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

pub fn save_query(store: &mut dyn PreferenceStore, key: &str, value: &str) {
    store.set(key, value);
}

/// A preference that has been read but cannot write yet.
#[derive(Debug)]
pub struct LoadedPreference<S> {
    store: S,
    key: String,
    value: String,
}

impl<S: PreferenceStore> LoadedPreference<S> {
    pub fn load(store: S, key: impl Into<String>, fallback: &str) -> Self {
        let key = key.into();
        let value = load_query(&store, &key, fallback);
        story_logging::story_debug!("Loaded preference {key}={value:?}");
        Self { store, key, value }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn arm(self) -> ArmedPreference<S> {
        ArmedPreference {
            store: self.store,
            key: self.key,
            value: self.value,
        }
    }
}

/// A preference that writes every change back to its store.
#[derive(Debug)]
pub struct ArmedPreference<S> {
    store: S,
    key: String,
    value: String,
}

impl<S: PreferenceStore> ArmedPreference<S> {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Writes `value` if it differs from the current one.
    pub fn set(&mut self, value: &str) {
        if self.value == value {
            return;
        }
        self.value = value.to_string();
        save_query(&mut self.store, &self.key, value);
    }
}

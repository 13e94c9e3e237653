//! Token store collaborator
//!
//! The bearer credential lives outside this library. Header assembly reads it
//! through the [`TokenStore`] trait so callers can plug in whatever storage
//! they have, and tests can substitute an in-memory map.

use std::collections::HashMap;

/// Key under which the bearer token is looked up.
pub const TOKEN_KEY: &str = "token";

/// Read-only key/value store holding an optional bearer credential.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// HashMap-backed token store.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    entries: HashMap<String, String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// The empty store, for callers that never send a token.
impl TokenStore for () {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryTokenStore, TokenStore, TOKEN_KEY};

    #[test]
    fn memory_store_round_trips_entries() {
        let mut store = MemoryTokenStore::new();
        assert_eq!(store.get(TOKEN_KEY), None);

        store.insert(TOKEN_KEY, "secret");
        assert_eq!(store.get(TOKEN_KEY), Some("secret".to_string()));

        store.clear();
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[test]
    fn unit_store_is_always_empty() {
        assert_eq!(().get(TOKEN_KEY), None);
    }
}

//! In-memory local store for tests and embedding without a storage file.

use std::cell::RefCell;
use std::collections::HashMap;

use super::LocalStore;
use crate::types::errors::StoreError;

/// A `LocalStore` backed by a plain map, with the same optional byte quota
/// as the SQLite backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: RefCell<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the total size of stored keys and values at `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            map: RefCell::new(HashMap::new()),
            quota_bytes: Some(bytes),
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.map.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.borrow().is_empty()
    }

    fn used_bytes(map: &HashMap<String, String>) -> usize {
        map.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl LocalStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.map.borrow_mut();
        if let Some(quota) = self.quota_bytes {
            let existing = map.get(key).map(|v| key.len() + v.len()).unwrap_or(0);
            let projected = Self::used_bytes(&map) - existing + key.len() + value.len();
            if projected > quota {
                return Err(StoreError::QuotaExceeded(key.to_string()));
            }
        }
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.map.borrow_mut().remove(key);
    }
}

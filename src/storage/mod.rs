//! Local key-value storage for ReviewChill client state.
//!
//! Everything this crate persists — page-view history, tracked events, theme,
//! form autosave snapshots — lives in one origin-scoped, string-keyed store
//! behind the [`LocalStore`] trait. Values are JSON-encoded by the callers;
//! the store itself only sees opaque strings.

pub mod connection;
pub mod memory;
pub mod migrations;

pub use connection::SqliteStore;
pub use memory::MemoryStore;

use crate::types::errors::StoreError;

/// Contract for the synchronous local key-value store.
///
/// `set` may fail with [`StoreError::QuotaExceeded`] when the store is out of
/// capacity; callers in this crate treat that as non-fatal. Backend read
/// failures surface as an absent value, never as an error.
pub trait LocalStore {
    /// Returns the stored value for `key`, or `None` if absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key` if present. Removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

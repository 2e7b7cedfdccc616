//! SQLite-backed local store.
//!
//! Provides the [`SqliteStore`] struct that wraps a `rusqlite::Connection`
//! and automatically runs schema migrations on open. An optional byte quota
//! models the finite capacity of browser-profile storage.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use super::migrations;
use super::LocalStore;
use crate::types::errors::StoreError;

/// Key-value store persisted in a single SQLite table.
pub struct SqliteStore {
    conn: Connection,
    quota_bytes: Option<usize>,
}

impl SqliteStore {
    /// Opens (or creates) the store at the given file path and runs migrations.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` if the connection cannot be established or
    /// migrations fail.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        migrations::run_all(&conn)?;
        Ok(Self {
            conn,
            quota_bytes: None,
        })
    }

    /// Opens an in-memory store and runs migrations.
    ///
    /// Useful for testing — the store is discarded when dropped.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        migrations::run_all(&conn)?;
        Ok(Self {
            conn,
            quota_bytes: None,
        })
    }

    /// Caps the total size of stored keys and values at `bytes`.
    /// Writes that would exceed the cap fail with [`StoreError::QuotaExceeded`].
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota_bytes = Some(bytes);
        self
    }

    /// Total bytes currently occupied by keys and values.
    pub fn used_bytes(&self) -> usize {
        self.conn
            .query_row(
                "SELECT COALESCE(SUM(LENGTH(key) + LENGTH(value)), 0) FROM kv",
                [],
                |row| row.get::<_, i64>(0),
            )
            .unwrap_or(0) as usize
    }

    /// Bytes occupied by an existing value for `key`, 0 if absent.
    fn entry_bytes(&self, key: &str) -> usize {
        self.conn
            .query_row(
                "SELECT LENGTH(key) + LENGTH(value) FROM kv WHERE key = ?1",
                params![key],
                |row| row.get::<_, i64>(0),
            )
            .optional()
            .ok()
            .flatten()
            .unwrap_or(0) as usize
    }

    fn now() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

impl LocalStore for SqliteStore {
    fn get(&self, key: &str) -> Option<String> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .unwrap_or_else(|e| {
                tracing::debug!(key, error = %e, "store read failed, treating as absent");
                None
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(quota) = self.quota_bytes {
            let projected =
                self.used_bytes() - self.entry_bytes(key) + key.len() + value.len();
            if projected > quota {
                return Err(StoreError::QuotaExceeded(key.to_string()));
            }
        }

        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)",
                params![key, value, Self::now()],
            )
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self
            .conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
        {
            tracing::debug!(key, error = %e, "store remove failed");
        }
    }
}

//! Key-value storage for state that outlives a session
//!
//! Only one entry lives here today: the last active date, stored as an
//! ISO-8601 UTC timestamp under [`LAST_ACTIVE_DATE_KEY`].

mod sqlite;

pub use sqlite::SqliteStore;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::{DateTime, Local, SecondsFormat, Utc};

/// Key under which the last active date is stored
pub const LAST_ACTIVE_DATE_KEY: &str = "lastActiveDate";

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid timestamp for {key}: {value:?}")]
    InvalidTimestamp { key: String, value: String },
}

/// A string key-value store scoped to this device
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Read the last active date, if one was stored
pub fn load_last_active(store: &dyn KvStore) -> Result<Option<DateTime<Local>>, StoreError> {
    let Some(raw) = store.get(LAST_ACTIVE_DATE_KEY)? else {
        return Ok(None);
    };

    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| Some(dt.with_timezone(&Local)))
        .map_err(|_| StoreError::InvalidTimestamp {
            key: LAST_ACTIVE_DATE_KEY.to_string(),
            value: raw,
        })
}

/// Persist the last active date as an ISO-8601 UTC string (`2024-03-10T11:00:00.000Z`)
pub fn save_last_active(store: &mut dyn KvStore, at: DateTime<Local>) -> Result<(), StoreError> {
    let value = at
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true);
    store.set(LAST_ACTIVE_DATE_KEY, &value)
}

/// In-memory store; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_last_active_roundtrip() {
        let mut store = MemoryStore::new();
        let at = Local.with_ymd_and_hms(2024, 3, 10, 12, 30, 0).unwrap();

        save_last_active(&mut store, at).unwrap();
        let raw = store.get(LAST_ACTIVE_DATE_KEY).unwrap().unwrap();
        assert!(raw.ends_with('Z'));
        assert_eq!(load_last_active(&store).unwrap(), Some(at));
    }

    #[test]
    fn test_missing_entry_is_none() {
        let store = MemoryStore::new();
        assert!(load_last_active(&store).unwrap().is_none());
    }

    #[test]
    fn test_garbage_entry_is_invalid_timestamp() {
        let store = MemoryStore::with_entry(LAST_ACTIVE_DATE_KEY, "last tuesday");
        let err = load_last_active(&store).unwrap_err();
        assert!(matches!(err, StoreError::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let mut writer = store.clone();
        writer.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}

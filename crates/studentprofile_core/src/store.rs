//! Opaque key-value profile store.
//!
//! # Responsibility
//! - Define the key→string persistence contract used by load/save.
//! - Provide the SQLite-backed implementation and an in-memory one.
//!
//! # Invariants
//! - Values are opaque text; the store never inspects encodings.
//! - `set` replaces the full value stored under a key.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store key for the student profile record.
pub const STUDENT_KEY: &str = "student";
/// Store key for the academic-history aggregate.
pub const HISTORY_KEY: &str = "studentHistory";
/// Store key for the course list.
pub const COURSES_KEY: &str = "studentCourses";

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport error for store reads and writes.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Opaque key→string persistence boundary.
pub trait ProfileStore {
    /// Returns the stored value for `key`, or `None` when absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Replaces the full value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// SQLite-backed store over the `kv_entries` table.
pub struct SqliteProfileStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProfileStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProfileStore for SqliteProfileStore<'_> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv_entries WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryStore, ProfileStore, SqliteProfileStore};
    use crate::db::open_db_in_memory;

    #[test]
    fn memory_store_get_returns_none_for_absent_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("student").unwrap(), None);
    }

    #[test]
    fn memory_store_set_replaces_full_value() {
        let mut store = MemoryStore::new();
        store.set("student", "first").unwrap();
        store.set("student", "second").unwrap();
        assert_eq!(store.get("student").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn sqlite_store_round_trips_and_upserts() {
        let conn = open_db_in_memory().unwrap();
        let mut store = SqliteProfileStore::new(&conn);

        assert_eq!(store.get("student").unwrap(), None);
        store.set("student", "{\"name\":\"John Doe\"}").unwrap();
        store.set("student", "{\"name\":\"Jane Doe\"}").unwrap();

        assert_eq!(
            store.get("student").unwrap().as_deref(),
            Some("{\"name\":\"Jane Doe\"}")
        );
    }
}

//! SQLite-backed key-value store.
//!
//! Every entity in the app lives under one string key as a string or JSON
//! value. Writes are `INSERT OR REPLACE`, so concurrent writers to the same
//! key resolve last-write-wins.

use std::path::Path;

use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, StorageError};

use super::data_dir;

/// Durable mapping from string keys to string values.
pub trait KvStore {
    /// Get a value, `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert or overwrite a value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Read and decode a JSON value.
    ///
    /// Undecodable data is logged and reported as absent so a corrupt entry
    /// never blocks a screen from loading.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>
    where
        Self: Sized,
    {
        let Some(raw) = self.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding undecodable stored value");
                Ok(None)
            }
        }
    }

    /// Encode a value as JSON and store it.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        let json = serde_json::to_string(value)?;
        self.set(key, &json)
    }
}

/// SQLite database holding the `kv` table.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/nofap-journey/journey.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("journey.db");
        Self::open_at(&path)
    }

    /// Open (or create) a database file at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )
    }

    /// All stored keys, sorted.
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv ORDER BY key")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut keys = Vec::new();
        for row in rows {
            keys.push(row?);
        }
        Ok(keys)
    }
}

impl KvStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => {
                tracing::error!(key, error = %e, "kv read failed");
                Err(e.into())
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
                params![key, value],
            )
            .map_err(|e| {
                tracing::error!(key, error = %e, "kv write failed");
                e
            })?;
        tracing::debug!(key, bytes = value.len(), "kv write");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map_err(|e| {
                tracing::error!(key, error = %e, "kv delete failed");
                e
            })?;
        tracing::debug!(key, "kv delete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn kv_store() {
        let db = Database::open_memory().unwrap();
        assert!(db.get("test").unwrap().is_none());
        db.set("test", "hello").unwrap();
        assert_eq!(db.get("test").unwrap().unwrap(), "hello");
    }

    #[test]
    fn set_overwrites_last_write_wins() {
        let db = Database::open_memory().unwrap();
        db.set("k", "first").unwrap();
        db.set("k", "second").unwrap();
        assert_eq!(db.get("k").unwrap().as_deref(), Some("second"));
        assert_eq!(db.keys().unwrap(), vec!["k".to_string()]);
    }

    #[test]
    fn remove_is_idempotent() {
        let db = Database::open_memory().unwrap();
        db.set("k", "v").unwrap();
        db.remove("k").unwrap();
        db.remove("k").unwrap();
        assert!(db.get("k").unwrap().is_none());
    }

    #[test]
    fn json_helpers_roundtrip_and_heal_corruption() {
        let db = Database::open_memory().unwrap();
        let sample = Sample {
            name: "a".into(),
            count: 3,
        };
        db.set_json("sample", &sample).unwrap();
        assert_eq!(db.get_json::<Sample>("sample").unwrap(), Some(sample));

        db.set("sample", "{not json").unwrap();
        assert_eq!(db.get_json::<Sample>("sample").unwrap(), None);
    }

    #[test]
    fn values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("journey.db");
        {
            let db = Database::open_at(&path).unwrap();
            db.set("hasStartedChallenge", "true").unwrap();
        }
        let db = Database::open_at(&path).unwrap();
        assert_eq!(
            db.get("hasStartedChallenge").unwrap().as_deref(),
            Some("true")
        );
    }
}

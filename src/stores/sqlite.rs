//! Implements a SQLite backed key-value store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension};

use crate::stores::{KeyValueStore, StoreError};

/// Keeps slots as rows of the `key_value` table in a SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Create a new store with a SQLite database, creating the table if needed.
    ///
    /// # Errors
    /// Returns an error if the table cannot be created.
    pub fn new(connection: Connection) -> Result<Self, StoreError> {
        create_key_value_table(&connection)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }
}

/// Create the key-value table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
fn create_key_value_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS key_value (
                key TEXT PRIMARY KEY NOT NULL,
                value BLOB NOT NULL
                )",
        (),
    )?;

    Ok(())
}

impl KeyValueStore for SqliteStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let connection = self
            .connection
            .lock()
            .map_err(|_| StoreError::LockPoisoned)?;

        let value = connection
            .query_row(
                "SELECT value FROM key_value WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;

        Ok(value)
    }

    fn save(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let connection = self
            .connection
            .lock()
            .map_err(|_| StoreError::LockPoisoned)?;

        connection.execute(
            "INSERT INTO key_value (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            (key, value),
        )?;

        Ok(())
    }
}

//! The storage port and its adapters.
//!
//! The tracker persists four independently keyed string values. The
//! [StorageAdapter] trait is the seam between the state store and whatever
//! holds those values durably, so tests can swap the SQLite adapter for the
//! in-memory one.

use std::collections::HashMap;

use rusqlite::{Connection, OptionalExtension, params};

use crate::Error;

/// Durable, keyed string storage with write-through semantics.
///
/// Reads are synchronous and a write must be visible to every subsequent
/// read. An absent key reads as `None`; the caller supplies the default.
pub trait StorageAdapter {
    /// Read the value stored under `key`, or `None` if the key is unset.
    fn read(&self, key: &str) -> Result<Option<String>, Error>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), Error>;
}

/// Create the key-value table that backs [SqliteStorage] if it does not exist.
pub fn create_storage_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS storage (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

/// A [StorageAdapter] over a single-table SQLite database.
#[derive(Debug)]
pub struct SqliteStorage {
    connection: Connection,
}

impl SqliteStorage {
    /// Wrap `connection`, creating the storage table if it does not exist.
    ///
    /// # Errors
    /// Returns an error if the storage table cannot be created.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        create_storage_table(&connection)?;

        Ok(Self { connection })
    }
}

impl StorageAdapter for SqliteStorage {
    fn read(&self, key: &str) -> Result<Option<String>, Error> {
        self.connection
            .query_row(
                "SELECT value FROM storage WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(Error::from)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.connection.execute(
            "INSERT INTO storage (key, value) VALUES (?1, ?2)
                ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;

        Ok(())
    }
}

/// An in-memory [StorageAdapter] used as a test fake.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty [MemoryStorage].
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageAdapter for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.values.insert(key.to_owned(), value.to_owned());

        Ok(())
    }
}


#[cfg(test)]
mod sqlite_storage_tests {
    use rusqlite::Connection;

    use super::{SqliteStorage, StorageAdapter};

    fn get_test_storage() -> SqliteStorage {
        let connection =
            Connection::open_in_memory().expect("Could not initialise in-memory SQLite database");

        SqliteStorage::new(connection).expect("Could not create storage table")
    }

    #[test]
    fn unset_key_reads_as_none() {
        let storage = get_test_storage();

        assert_eq!(storage.read("total").unwrap(), None);
    }

    #[test]
    fn write_is_visible_to_subsequent_read() {
        let mut storage = get_test_storage();

        storage.write("reason", "groceries").unwrap();

        assert_eq!(
            storage.read("reason").unwrap(),
            Some("groceries".to_owned())
        );
    }

    #[test]
    fn write_replaces_previous_value() {
        let mut storage = get_test_storage();

        storage.write("expense", "50").unwrap();
        storage.write("expense", "20").unwrap();

        assert_eq!(storage.read("expense").unwrap(), Some("20".to_owned()));
    }

    #[test]
    fn keys_are_independent() {
        let mut storage = get_test_storage();

        storage.write("expense", "50").unwrap();

        assert_eq!(storage.read("expense").unwrap(), Some("50".to_owned()));
        assert_eq!(storage.read("reason").unwrap(), None);
        assert_eq!(storage.read("log").unwrap(), None);
        assert_eq!(storage.read("total").unwrap(), None);
    }
}

#[cfg(test)]
mod memory_storage_tests {
    use super::{MemoryStorage, StorageAdapter};

    #[test]
    fn behaves_like_keyed_storage() {
        let mut storage = MemoryStorage::new();

        assert_eq!(storage.read("expense").unwrap(), None);

        storage.write("expense", "50").unwrap();
        storage.write("expense", "20").unwrap();

        assert_eq!(storage.read("expense").unwrap(), Some("20".to_owned()));
        assert_eq!(storage.read("reason").unwrap(), None);
    }
}

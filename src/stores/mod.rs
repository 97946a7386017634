//! Contains the key-value store trait and its implementations.
//!
//! A store holds opaque byte slots addressed by string keys. Everything above
//! the store (see [crate::ledger]) decides what goes in a slot and how it is
//! encoded.

use std::fmt;

mod file;
mod memory;
mod sqlite;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// The errors that may occur while reading or writing a slot.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the underlying file failed.
    #[error("could not access the store file: {0}")]
    Io(#[from] std::io::Error),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    Sql(#[from] rusqlite::Error),

    /// A thread panicked while holding the store's lock.
    #[error("could not acquire the store lock")]
    LockPoisoned,
}

/// Reads and writes byte slots addressed by string keys.
///
/// Implementations must overwrite the whole slot on [KeyValueStore::save];
/// there is no partial update.
pub trait KeyValueStore: Send + Sync + fmt::Debug {
    /// Retrieve the contents of the slot `key`, or `None` if nothing has been saved there.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replace the contents of the slot `key` with `value`.
    fn save(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}

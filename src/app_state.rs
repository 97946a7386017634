//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    Error,
    ledger::Ledger,
    stores::KeyValueStore,
    timezone::get_local_offset,
    transaction::Transaction,
};

/// The ledger type shared by the route handlers.
pub type SharedLedger = Arc<Ledger<Box<dyn KeyValueStore>>>;

/// The in-memory copy of the transaction collection shared by the route handlers.
pub type SharedTransactions = Arc<Mutex<Vec<Transaction>>>;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Reads and writes the persisted transaction collection.
    pub ledger: SharedLedger,

    /// The transactions to render pages from.
    ///
    /// Loaded from the ledger once when the state is created, then replaced
    /// with the collection the ledger returns after each change.
    pub transactions: SharedTransactions,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] that keeps transactions in `store`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezone] if `local_timezone` is not a known timezone.
    pub fn new(store: impl KeyValueStore + 'static, local_timezone: &str) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezone(local_timezone.to_owned()));
        }

        let store: Box<dyn KeyValueStore> = Box::new(store);
        let ledger = Ledger::new(store);
        let transactions = ledger.load();
        tracing::info!("Loaded {} transactions", transactions.len());

        Ok(Self {
            ledger: Arc::new(ledger),
            transactions: Arc::new(Mutex::new(transactions)),
            local_timezone: local_timezone.to_owned(),
        })
    }
}

/// Lock the in-memory transaction collection.
///
/// # Errors
/// Returns [Error::LockError] if another thread panicked while holding the lock.
pub fn lock_transactions(
    transactions: &SharedTransactions,
) -> Result<MutexGuard<'_, Vec<Transaction>>, Error> {
    transactions.lock().map_err(|error| {
        tracing::error!("could not acquire transactions lock: {error}");
        Error::LockError
    })
}

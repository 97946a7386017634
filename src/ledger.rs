//! The storage adapter for the transaction collection.
//!
//! The whole collection lives in a single slot of a [KeyValueStore] as a JSON
//! array, and every mutation reads the collection, changes it and writes the
//! whole collection back. Storage failures never reach the caller: they are
//! logged and the caller sees an empty or unchanged collection instead.

use crate::{
    stores::KeyValueStore,
    transaction::{Transaction, TransactionId},
};

/// The key of the slot holding the transaction collection.
pub const TRANSACTIONS_KEY: &str = "personal_finance_transactions";

/// Reads and writes the transaction collection to a key-value store.
///
/// No operation is atomic across processes sharing the same store, the last
/// write wins.
#[derive(Debug)]
pub struct Ledger<S> {
    store: S,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Create a ledger that keeps its collection in `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get the persisted collection in the order it was stored.
    ///
    /// Returns an empty collection if nothing has been saved yet, or if the
    /// stored data cannot be read or parsed.
    pub fn load(&self) -> Vec<Transaction> {
        let bytes = match self.store.load(TRANSACTIONS_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(error) => {
                tracing::error!("Error getting transactions from the store: {error}");
                return Vec::new();
            }
        };

        serde_json::from_slice(&bytes).unwrap_or_else(|error| {
            tracing::error!("Error parsing stored transactions, discarding them: {error}");
            Vec::new()
        })
    }

    /// Overwrite the persisted collection with `transactions`.
    ///
    /// Failures are logged and otherwise ignored.
    pub fn save(&self, transactions: &[Transaction]) {
        let bytes = match serde_json::to_vec(transactions) {
            Ok(bytes) => bytes,
            Err(error) => {
                tracing::error!("Error serializing transactions: {error}");
                return;
            }
        };

        if let Err(error) = self.store.save(TRANSACTIONS_KEY, &bytes) {
            tracing::error!("Error saving transactions to the store: {error}");
        }
    }

    /// Put `transaction` at the front of the collection and persist it.
    ///
    /// Returns the updated collection, newest first.
    pub fn add(&self, transaction: Transaction) -> Vec<Transaction> {
        let mut transactions = self.load();
        transactions.insert(0, transaction);
        self.save(&transactions);

        transactions
    }

    /// Remove the transaction with `id` from the collection and persist it.
    ///
    /// Returns the updated collection, which is unchanged if no transaction
    /// has the ID `id`.
    pub fn remove(&self, id: &TransactionId) -> Vec<Transaction> {
        let mut transactions = self.load();
        transactions.retain(|transaction| &transaction.id != id);
        self.save(&transactions);

        transactions
    }

    /// Replace the transaction with the same ID as `transaction` and persist the collection.
    ///
    /// Returns the updated collection, which is unchanged if no transaction
    /// has the ID of `transaction`.
    pub fn replace(&self, transaction: Transaction) -> Vec<Transaction> {
        let transactions: Vec<_> = self
            .load()
            .into_iter()
            .map(|existing| {
                if existing.id == transaction.id {
                    transaction.clone()
                } else {
                    existing
                }
            })
            .collect();
        self.save(&transactions);

        transactions
    }
}

//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - The form for entering a transaction and its validation
//! - Route handlers for creating, editing and deleting transactions
//! - The table that lists transactions on the overview page

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod form;
mod list;

use axum::extract::FromRef;
use serde::Deserialize;

pub use self::core::{
    Category, EXPENSE_CATEGORIES, INCOME_CATEGORIES, Transaction, TransactionBuilder,
    TransactionId, TransactionType,
};
pub use create_endpoint::{create_transaction_endpoint, new_transaction_form};
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use edit_page::get_edit_transaction_page;
pub use list::transactions_table;

use crate::{
    AppState,
    app_state::{SharedLedger, SharedTransactions},
};

/// The state needed to change the transaction collection.
#[derive(Debug, Clone)]
pub struct TransactionLedgerState {
    /// Reads and writes the persisted collection.
    pub ledger: SharedLedger,
    /// The in-memory copy of the collection, replaced after each change.
    pub transactions: SharedTransactions,
}

impl FromRef<AppState> for TransactionLedgerState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            transactions: state.transactions.clone(),
        }
    }
}

/// The query parameters for the transaction endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct RedirectQuery {
    /// The page to send the client to once the request succeeds.
    pub redirect_url: Option<String>,
}

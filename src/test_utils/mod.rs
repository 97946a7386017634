#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use form::{
    assert_form_input, assert_form_input_with_value, assert_form_submit_button_with_text,
    assert_hx_endpoint, must_get_form,
};
pub(crate) use html::{assert_valid_html, parse_html_document, parse_html_fragment};
pub(crate) use http::{assert_content_type, assert_hx_redirect, assert_status_ok};

use time::Date;

use crate::{
    AppState,
    stores::MemoryStore,
    transaction::{Category, Transaction, TransactionType},
};

/// Create an [AppState] backed by an empty in-memory store.
pub(crate) fn get_test_state() -> AppState {
    AppState::new(MemoryStore::new(), "Etc/UTC").expect("Could not create test state")
}

/// Create an [AppState] whose store already holds `transactions`.
pub(crate) fn get_test_state_with(transactions: &[Transaction]) -> AppState {
    let state = get_test_state();
    state.ledger.save(transactions);
    *state.transactions.lock().unwrap() = state.ledger.load();

    state
}

pub(crate) fn create_test_transaction(
    id: &str,
    transaction_type: TransactionType,
    amount: f64,
    date: Date,
    category: Category,
) -> Transaction {
    Transaction::build(transaction_type, amount, date, "Test transaction")
        .category(category)
        .finalize_with_id(id.into())
}

//! Defines the form and endpoint for creating a new transaction.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use time::Date;

use crate::{
    app_state::lock_transactions,
    endpoints::{self, local_redirect_url, with_redirect_url},
    html::{BUTTON_PRIMARY_STYLE, loading_spinner},
    transaction::{
        RedirectQuery, TransactionLedgerState,
        form::{TransactionForm, TransactionFormDefaults, transaction_form_fields},
    },
};

/// The form for adding a transaction, defaulting to an expense dated `today`.
///
/// On success the client is sent to `redirect_url`.
pub fn new_transaction_form(today: Date, redirect_url: &str) -> Markup {
    let create_endpoint = with_redirect_url(endpoints::TRANSACTIONS_API, redirect_url);

    html! {
        form
            hx-post=(create_endpoint)
            hx-target-error="#alert-container"
            hx-indicator="#indicator"
            hx-disabled-elt="#submit-button"
            class="w-full space-y-4 md:space-y-6"
        {
            (transaction_form_fields(&TransactionFormDefaults::new_transaction(today)))

            button
                type="submit"
                id="submit-button"
                class=(BUTTON_PRIMARY_STYLE)
            {
                span id="indicator" class="htmx-indicator" { (loading_spinner()) }
                " Add Transaction"
            }
        }
    }
}

/// A route handler for creating a new transaction, redirects to `redirect_url` on success.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionLedgerState>,
    Query(query): Query<RedirectQuery>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let builder = match form.validate() {
        Ok(builder) => builder,
        Err(error) => {
            tracing::warn!("Rejected new transaction: {error}");
            return error.into_alert_response();
        }
    };

    let transaction = builder.finalize();
    tracing::debug!("Creating transaction {}", transaction.id);

    let mut transactions = match lock_transactions(&state.transactions) {
        Ok(transactions) => transactions,
        Err(error) => return error.into_alert_response(),
    };
    *transactions = state.ledger.add(transaction);

    (
        HxRedirect(local_redirect_url(query.redirect_url)),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

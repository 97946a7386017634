use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    Error,
    app_state::lock_transactions,
    endpoints::local_redirect_url,
    transaction::{RedirectQuery, TransactionId, TransactionLedgerState, form::TransactionForm},
};

/// A route handler for replacing the transaction `transaction_id` with the submitted values.
///
/// The transaction keeps its ID. Redirects to `redirect_url` on success.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionLedgerState>,
    Path(transaction_id): Path<TransactionId>,
    Query(query): Query<RedirectQuery>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let builder = match form.validate() {
        Ok(builder) => builder,
        Err(error) => {
            tracing::warn!("Rejected update to transaction {transaction_id}: {error}");
            return error.into_alert_response();
        }
    };

    let mut transactions = match lock_transactions(&state.transactions) {
        Ok(transactions) => transactions,
        Err(error) => return error.into_alert_response(),
    };

    if !transactions
        .iter()
        .any(|transaction| transaction.id == transaction_id)
    {
        tracing::error!("Could not update transaction {transaction_id}: no such transaction");
        return Error::UpdateMissingTransaction.into_alert_response();
    }

    *transactions = state
        .ledger
        .replace(builder.finalize_with_id(transaction_id));

    (
        HxRedirect(local_redirect_url(query.redirect_url)),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    Error,
    app_state::lock_transactions,
    endpoints::local_redirect_url,
    transaction::{RedirectQuery, TransactionId, TransactionLedgerState},
};

/// A route handler for deleting a transaction.
///
/// Redirects to `redirect_url` on success so that the list and the dashboard
/// are rendered again without the transaction. Responds with an alert if the
/// transaction does not exist.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionLedgerState>,
    Path(transaction_id): Path<TransactionId>,
    Query(query): Query<RedirectQuery>,
) -> Response {
    let mut transactions = match lock_transactions(&state.transactions) {
        Ok(transactions) => transactions,
        Err(error) => return error.into_alert_response(),
    };

    if !transactions
        .iter()
        .any(|transaction| transaction.id == transaction_id)
    {
        tracing::error!("Could not delete transaction {transaction_id}: no such transaction");
        return Error::DeleteMissingTransaction.into_alert_response();
    }

    tracing::debug!("Deleting transaction {transaction_id}");
    *transactions = state.ledger.remove(&transaction_id);

    (
        HxRedirect(local_redirect_url(query.redirect_url)),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

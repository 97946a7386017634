use axum::{
    extract::{FromRef, Path, Query, State},
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{
    AppState,
    app_state::{SharedTransactions, lock_transactions},
    endpoints::{self, format_endpoint, local_redirect_url, with_redirect_url},
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_CONTAINER_STYLE, base,
        dollar_input_styles, loading_spinner,
    },
    not_found::get_404_not_found_response,
    transaction::{
        RedirectQuery, TransactionId,
        form::{TransactionFormDefaults, transaction_form_fields},
    },
};

/// The state needed for the edit transaction page.
#[derive(Debug, Clone)]
pub struct EditTransactionPageState {
    /// The transactions to look the edited transaction up in.
    pub transactions: SharedTransactions,
}

impl FromRef<AppState> for EditTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transactions: state.transactions.clone(),
        }
    }
}

/// Renders the page for editing a transaction.
pub async fn get_edit_transaction_page(
    State(state): State<EditTransactionPageState>,
    Path(transaction_id): Path<TransactionId>,
    Query(query): Query<RedirectQuery>,
) -> Response {
    let transactions = match lock_transactions(&state.transactions) {
        Ok(transactions) => transactions,
        Err(error) => return error.into_response(),
    };

    let Some(transaction) = transactions
        .iter()
        .find(|transaction| transaction.id == transaction_id)
    else {
        tracing::warn!("Tried to edit missing transaction {transaction_id}");
        return get_404_not_found_response();
    };

    let redirect_url = local_redirect_url(query.redirect_url);
    let edit_endpoint = with_redirect_url(
        &format_endpoint(endpoints::TRANSACTION, transaction_id.as_str()),
        &redirect_url,
    );

    let content = html! {
        div class=(FORM_CONTAINER_STYLE)
        {
            h2 class="mb-4 text-xl font-bold" { "Edit Transaction" }

            form
                hx-put=(edit_endpoint)
                hx-target-error="#alert-container"
                hx-indicator="#indicator"
                hx-disabled-elt="#submit-button"
                class="w-full space-y-4 md:space-y-6"
            {
                (transaction_form_fields(&TransactionFormDefaults::from(transaction)))

                button
                    type="submit"
                    id="submit-button"
                    class=(BUTTON_PRIMARY_STYLE)
                {
                    span id="indicator" class="htmx-indicator" { (loading_spinner()) }
                    " Save Changes"
                }
            }

            a href=(redirect_url) class={ "block mt-4 text-center " (BUTTON_SECONDARY_STYLE) }
            {
                "Cancel"
            }
        }
    };

    base("Edit Transaction", &[dollar_input_styles()], &content).into_response()
}

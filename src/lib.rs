//! A personal finance tracker for recording income and expenses.
//!
//! Transactions are kept as a single JSON collection in a local key-value
//! store, see [Ledger]. This library serves a single page that shows a form
//! for adding transactions, the transactions for a chosen month and category,
//! and a dashboard of totals for that selection.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod aggregation;
mod alert;
mod app_state;
mod dashboard;
mod endpoints;
mod html;
mod internal_server_error;
mod ledger;
mod logging;
mod month;
mod not_found;
mod overview;
mod routing;
mod timezone;
mod transaction;

#[cfg(test)]
mod test_utils;

pub mod stores;

pub use aggregation::{CategoryFilter, Summary, filter_by_category, filter_by_month, summarize};
pub use app_state::AppState;
pub use ledger::{Ledger, TRANSACTIONS_KEY};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use transaction::{
    Category, EXPENSE_CATEGORIES, INCOME_CATEGORIES, Transaction, TransactionBuilder,
    TransactionId, TransactionType,
};

use crate::{
    alert::Alert, internal_server_error::InternalServerError,
    not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// A thread panicked while holding the lock on the transactions.
    #[error("could not acquire the transactions lock")]
    LockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// The amount of a transaction was negative or not a finite number.
    ///
    /// The sign of a transaction is given by its type, so amounts are
    /// always non-negative.
    #[error("{0} is not a valid amount, amounts must be zero or more")]
    InvalidAmount(f64),

    /// A transaction was submitted without a description.
    #[error("the description cannot be empty")]
    EmptyDescription,

    /// The category of a transaction is not one of the categories for its type.
    #[error("the category {category} cannot be used for {} transactions", .transaction_type.as_str())]
    CategoryMismatch {
        /// The category that was submitted.
        category: Category,
        /// The type of the submitted transaction.
        transaction_type: TransactionType,
    },

    /// Tried to update a transaction that does not exist
    #[error("tried to update a transaction that is not in the ledger")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist
    #[error("tried to delete a transaction that is not in the ledger")]
    DeleteMissingTransaction,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::InvalidTimezone(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::LockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::InvalidTimezone(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                        ensure the timezone has been set to valid, canonical timezone string"
                    ),
                },
            ),
            Error::InvalidAmount(amount) => (
                StatusCode::BAD_REQUEST,
                Alert {
                    message: "Invalid amount".to_owned(),
                    details: format!(
                        "{amount} is not a valid amount. Enter an amount of zero or more, \
                        the transaction type decides whether it is income or an expense."
                    ),
                },
            ),
            Error::EmptyDescription => (
                StatusCode::BAD_REQUEST,
                Alert {
                    message: "Missing description".to_owned(),
                    details: "Enter a short description of the transaction.".to_owned(),
                },
            ),
            Error::CategoryMismatch {
                category,
                transaction_type,
            } => (
                StatusCode::BAD_REQUEST,
                Alert {
                    message: "Invalid category".to_owned(),
                    details: format!(
                        "{} is not a category for {} transactions. Choose one of the {} categories.",
                        category.label(),
                        transaction_type.as_str(),
                        transaction_type.as_str(),
                    ),
                },
            ),
            Error::UpdateMissingTransaction | Error::NotFound => (
                StatusCode::NOT_FOUND,
                Alert {
                    message: "Could not update transaction".to_owned(),
                    details: "The transaction could not be found.".to_owned(),
                },
            ),
            Error::DeleteMissingTransaction => (
                StatusCode::NOT_FOUND,
                Alert {
                    message: "Could not delete transaction".to_owned(),
                    details: "The transaction could not be found. \
                        Try refreshing the page to see if the transaction has already been deleted."
                        .to_owned(),
                },
            ),
            Error::LockError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert {
                    message: "Something went wrong".to_owned(),
                    details: "An unexpected error occurred, check the server logs for more details."
                        .to_owned(),
                },
            ),
        };

        alert.into_response_with_status(status_code)
    }
}

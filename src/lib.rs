//! Penny Ledger is a small web app for tracking income and expenses.
//!
//! Transactions are entered through a form, shown in a list with a delete
//! button per entry, and summed into running totals. This library provides
//! a REST API that directly serves HTML pages and htmx fragments.

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
mod endpoints;
mod html;
mod internal_server_error;
mod logging;
mod not_found;
mod routing;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use aggregation::{HasValue, sum};
pub use app_state::{AppState, FormSession};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use transaction::{
    FormField, FormSurface, HtmlFormSurface, IdGenerator, Ledger, SequentialIds, Totals,
    TransactionForm, TransactionId, TransactionItem, TransactionList, TransactionRecord,
    TransactionType, UuidGenerator, parse_value,
};

use crate::{
    alert::Alert,
    internal_server_error::{get_internal_server_error_redirect, render_internal_server_error},
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
    /// Tried to delete a transaction that is not in the ledger.
    #[error("tried to delete a transaction that is not in the ledger")]
    DeleteMissingTransaction,

    /// A thread panicked while holding a lock on the shared state.
    ///
    /// The state may be inconsistent, so the request cannot be served.
    #[error("could not acquire the lock on the application state")]
    LockPoisoned,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::DeleteMissingTransaction => get_404_not_found_response(),
            Error::LockPoisoned => render_internal_server_error(
                "Could not read the ledger",
                "The server hit an unrecoverable error, restart the server and check the logs.",
            ),
        }
    }
}

impl Error {
    /// Convert the error into a response for htmx requests.
    ///
    /// Recoverable errors are rendered as an alert for the page's alert
    /// container, all others send the browser to the error page.
    fn into_alert_response(self) -> Response {
        match self {
            Error::DeleteMissingTransaction => Alert::error(
                "Could not delete transaction",
                "The transaction could not be found. \
                Try refreshing the page to see if the transaction has already been deleted.",
            )
            .into_response_with_status(StatusCode::NOT_FOUND),
            Error::LockPoisoned => {
                tracing::error!("Redirecting to the error page: {self}");
                get_internal_server_error_redirect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::test_utils::{get_header, parse_html_fragment};

    use super::Error;

    #[tokio::test]
    async fn missing_transaction_alert_is_not_found() {
        let response = Error::DeleteMissingTransaction.into_alert_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = parse_html_fragment(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Could not delete transaction"), "got {text:?}");
    }

    #[test]
    fn poisoned_lock_redirects_htmx_to_error_page() {
        let response = Error::LockPoisoned.into_alert_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(get_header(&response, "hx-redirect"), "/error");
    }

    #[test]
    fn poisoned_lock_page_is_internal_server_error() {
        let response = Error::LockPoisoned.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

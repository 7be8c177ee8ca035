//! Defines the route handlers for the main page and the JSON view of the ledger.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Serialize;

use crate::{
    AppState,
    app_state::{FormSession, lock},
    html::{FORM_CONTAINER_STYLE, PAGE_CONTAINER_STYLE, base},
    transaction::{
        Ledger, Totals, TransactionRecord,
        core::IdGenerator,
        form::transaction_form_view,
        list::transaction_list_view,
    },
};

/// The HTML element ID of the totals summary.
pub const TOTALS_ID: &str = "transaction-totals";

/// The state needed to display the main page.
#[derive(Debug)]
pub struct TransactionsPageState<G> {
    /// The submitted transactions.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The transaction form shown on the page.
    pub form_session: Arc<Mutex<FormSession<G>>>,
}

impl<G> Clone for TransactionsPageState<G> {
    fn clone(&self) -> Self {
        Self {
            ledger: self.ledger.clone(),
            form_session: self.form_session.clone(),
        }
    }
}

impl<G: Clone> FromRef<AppState<G>> for TransactionsPageState<G> {
    fn from_ref(state: &AppState<G>) -> Self {
        Self {
            ledger: state.ledger.clone(),
            form_session: state.form_session.clone(),
        }
    }
}

/// Display the transaction form, the list of transactions and the totals.
///
/// Rendering the page mounts the form, after which submissions are accepted.
pub async fn get_transactions_page<G: IdGenerator>(
    State(state): State<TransactionsPageState<G>>,
) -> Response {
    let mut session = match lock(&state.form_session) {
        Ok(session) => session,
        Err(error) => return error.into_response(),
    };
    let ledger = match lock(&state.ledger) {
        Ok(ledger) => ledger,
        Err(error) => return error.into_response(),
    };

    let focused = session.mount();
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            div class=(FORM_CONTAINER_STYLE)
            {
                h1 class="mb-6 text-2xl font-bold" { "Transactions" }

                (totals_view(ledger.totals(), false))
                (transaction_form_view(&session.form, focused))

                div class="w-full mt-8"
                {
                    (transaction_list_view(ledger.records(), false))
                }
            }
        }
    };

    Html(base("Transactions", &content).into_string()).into_response()
}

/// Render the income, expense and balance totals.
///
/// Set `swap_oob` when the totals are sent alongside another fragment.
pub fn totals_view(totals: Totals, swap_oob: bool) -> Markup {
    let rows = [
        ("Income", totals.income),
        ("Expenses", totals.expenses),
        ("Balance", totals.balance),
    ];

    html! {
        dl
            id=(TOTALS_ID)
            hx-swap-oob=[swap_oob.then_some("true")]
            class="grid w-full grid-cols-3 gap-4 mb-6 text-center"
        {
            @for (label, amount) in rows {
                div
                {
                    dt class="text-sm text-gray-500 dark:text-gray-400" { (label) }
                    dd class="text-lg font-semibold tabular-nums" data-total=(label.to_lowercase())
                    {
                        (amount)
                    }
                }
            }
        }
    }
}

/// The JSON body for [get_transactions_json].
#[derive(Debug, Serialize)]
pub struct TransactionsJson {
    /// The records in the order they were added.
    pub transactions: Vec<TransactionRecord>,
    /// The totals over all records.
    pub totals: Totals,
}

/// A route handler that lists the transactions and their totals as JSON.
pub async fn get_transactions_json(State(ledger): State<Arc<Mutex<Ledger>>>) -> Response {
    let ledger = match lock(&ledger) {
        Ok(ledger) => ledger,
        Err(error) => return error.into_response(),
    };

    Json(TransactionsJson {
        transactions: ledger.records().to_vec(),
        totals: ledger.totals(),
    })
    .into_response()
}

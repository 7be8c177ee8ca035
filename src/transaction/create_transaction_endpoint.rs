//! Defines the endpoint for submitting the transaction form.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::Form;
use maud::html;
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    app_state::{FormSession, lock},
    transaction::{
        Ledger,
        core::{IdGenerator, TransactionType},
        form::{HtmlFormSurface, transaction_form_view},
        list::transaction_list_view,
        transactions_page::totals_view,
    },
};

/// The state needed to submit a transaction.
#[derive(Debug)]
pub struct CreateTransactionState<G> {
    /// The submitted transactions.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The transaction form shown on the main page.
    pub form_session: Arc<Mutex<FormSession<G>>>,
}

impl<G> Clone for CreateTransactionState<G> {
    fn clone(&self) -> Self {
        Self {
            ledger: self.ledger.clone(),
            form_session: self.form_session.clone(),
        }
    }
}

impl<G: Clone> FromRef<AppState<G>> for CreateTransactionState<G> {
    fn from_ref(state: &AppState<G>) -> Self {
        Self {
            ledger: state.ledger.clone(),
            form_session: state.form_session.clone(),
        }
    }
}

/// The form data for submitting a transaction.
///
/// All fields are kept as raw text so that incomplete drafts can be checked
/// by [crate::transaction::TransactionForm] rather than rejected by the extractor.
#[derive(Debug, Deserialize, Serialize)]
pub struct TransactionFormData {
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type", default)]
    pub transaction_type: TransactionType,
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: String,
    /// The value of the transaction as typed.
    #[serde(default)]
    pub value: String,
}

/// A route handler for submitting the transaction form.
///
/// On success the new transaction is added to the ledger and the response
/// contains the reset form with the description focused, plus out-of-band
/// updates for the transaction list and the totals.
///
/// If the form has not been rendered yet or the draft is incomplete, nothing
/// is added and the response is empty with the status code 204 No Content.
pub async fn create_transaction_endpoint<G: IdGenerator>(
    State(state): State<CreateTransactionState<G>>,
    Form(data): Form<TransactionFormData>,
) -> Response {
    let mut session = match lock(&state.form_session) {
        Ok(session) => session,
        Err(error) => return error.into_alert_response(),
    };
    let mut ledger = match lock(&state.ledger) {
        Ok(ledger) => ledger,
        Err(error) => return error.into_alert_response(),
    };

    let FormSession { form, surface } = &mut *session;
    form.change_type(data.transaction_type);
    form.change_description(data.description);
    form.change_value(data.value);

    let mut submitted = false;
    form.submit(surface.as_mut(), |record| {
        ledger.add(record);
        submitted = true;
    });

    if !submitted {
        return StatusCode::NO_CONTENT.into_response();
    }

    let focused = surface.as_ref().and_then(HtmlFormSurface::focused);
    let markup = html! {
        (transaction_form_view(form, focused))
        (transaction_list_view(ledger.records(), true))
        (totals_view(ledger.totals(), true))
    };

    Html(markup.into_string()).into_response()
}

use std::{
    cell::RefCell,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{FromRef, Path, State},
    response::{Html, IntoResponse, Response},
};
use maud::html;

use crate::{
    AppState, Error,
    app_state::lock,
    transaction::{
        Ledger, TransactionId,
        list::{TransactionList, transaction_list_view},
        transactions_page::totals_view,
    },
};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The submitted transactions.
    ledger: Arc<Mutex<Ledger>>,
}

impl<G: Clone> FromRef<AppState<G>> for DeleteTransactionState {
    fn from_ref(state: &AppState<G>) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// A route handler for the delete button of a transaction list item.
///
/// Responds with the updated transaction list and an out-of-band update for the totals.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let mut ledger = match lock(&state.ledger) {
        Ok(ledger) => ledger,
        Err(error) => return error.into_alert_response(),
    };

    if let Err(error) = click_delete(&mut ledger, &transaction_id) {
        tracing::error!("Could not delete transaction {transaction_id}: {error}");
        return error.into_alert_response();
    }

    let markup = html! {
        (transaction_list_view(ledger.records(), false))
        (totals_view(ledger.totals(), true))
    };

    Html(markup.into_string()).into_response()
}

/// Press the delete button of the list item for `transaction_id`.
///
/// The item passes its ID up to the ledger, which then removes the record.
fn click_delete(ledger: &mut Ledger, transaction_id: &TransactionId) -> Result<(), Error> {
    let requested = RefCell::new(None);
    let list = TransactionList::new(ledger.records(), |id: &TransactionId| {
        *requested.borrow_mut() = Some(id.clone());
    });

    list.item(transaction_id)
        .ok_or(Error::DeleteMissingTransaction)?
        .click_delete();

    match requested.into_inner() {
        Some(id) => ledger.delete(&id).map(|_| ()),
        None => Err(Error::DeleteMissingTransaction),
    }
}

//! Defines the endpoints that apply keystrokes and selections to the draft transaction.
//!
//! Each endpoint replaces one field of the draft and responds with the submit
//! button so that its disabled state always reflects the current draft.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::Form;
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    app_state::{FormSession, lock},
    transaction::{
        core::{IdGenerator, TransactionType},
        form::{TransactionForm, submit_button_view},
    },
};

/// The state needed to change the draft transaction.
#[derive(Debug)]
pub struct FormState<G> {
    /// The transaction form shown on the main page.
    pub form_session: Arc<Mutex<FormSession<G>>>,
}

impl<G> Clone for FormState<G> {
    fn clone(&self) -> Self {
        Self {
            form_session: self.form_session.clone(),
        }
    }
}

impl<G: Clone> FromRef<AppState<G>> for FormState<G> {
    fn from_ref(state: &AppState<G>) -> Self {
        Self {
            form_session: state.form_session.clone(),
        }
    }
}

/// The form data for changing the transaction type.
#[derive(Debug, Deserialize, Serialize)]
pub struct TypeForm {
    /// The newly selected transaction type.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

/// The form data for changing the description.
#[derive(Debug, Deserialize, Serialize)]
pub struct DescriptionForm {
    /// The description as typed so far.
    #[serde(default)]
    pub description: String,
}

/// The form data for changing the value.
#[derive(Debug, Deserialize, Serialize)]
pub struct ValueForm {
    /// The value as typed so far.
    #[serde(default)]
    pub value: String,
}

/// A route handler for selecting the transaction type, responds with the submit button.
pub async fn change_type_endpoint<G: IdGenerator>(
    State(state): State<FormState<G>>,
    Form(form): Form<TypeForm>,
) -> Response {
    update_form(&state, |draft| draft.change_type(form.transaction_type))
}

/// A route handler for typing in the description, responds with the submit button.
pub async fn change_description_endpoint<G: IdGenerator>(
    State(state): State<FormState<G>>,
    Form(form): Form<DescriptionForm>,
) -> Response {
    update_form(&state, |draft| draft.change_description(form.description))
}

/// A route handler for typing in the value, responds with the submit button.
pub async fn change_value_endpoint<G: IdGenerator>(
    State(state): State<FormState<G>>,
    Form(form): Form<ValueForm>,
) -> Response {
    update_form(&state, |draft| draft.change_value(form.value))
}

fn update_form<G: IdGenerator>(
    state: &FormState<G>,
    change: impl FnOnce(&mut TransactionForm<G>),
) -> Response {
    let mut session = match lock(&state.form_session) {
        Ok(session) => session,
        Err(error) => return error.into_alert_response(),
    };

    change(&mut session.form);

    Html(submit_button_view(session.form.can_submit()).into_string()).into_response()
}

//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::FromRef;

use crate::{
    Error,
    transaction::{
        FormField, HtmlFormSurface, IdGenerator, Ledger, TransactionForm, UuidGenerator,
    },
};

/// The transaction form together with the page it is displayed on.
///
/// `surface` is `None` until the page with the form has been rendered.
///
/// There is one session per server, not per client: every browser tab edits
/// the same draft, and the form counts as mounted once any client has loaded
/// the page. Changes from two tabs typing at the same time overwrite each other.
#[derive(Debug)]
pub struct FormSession<G = UuidGenerator> {
    /// The draft transaction.
    pub form: TransactionForm<G>,
    /// The rendered form, if any.
    pub surface: Option<HtmlFormSurface>,
}

impl<G: IdGenerator> FormSession<G> {
    /// Create a session with an empty form that has not been rendered yet.
    pub fn new(id_generator: G) -> Self {
        Self {
            form: TransactionForm::new(id_generator),
            surface: None,
        }
    }

    /// Mark the form as rendered and return the field that should have focus.
    pub fn mount(&mut self) -> Option<FormField> {
        self.surface
            .get_or_insert_with(HtmlFormSurface::default)
            .focused()
    }

    /// The field that should have focus when the form is next rendered.
    pub fn focused(&self) -> Option<FormField> {
        self.surface.as_ref().and_then(HtmlFormSurface::focused)
    }
}

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<G = UuidGenerator> {
    /// The submitted transactions.
    pub ledger: Arc<Mutex<Ledger>>,

    /// The transaction form shown on the main page.
    pub form_session: Arc<Mutex<FormSession<G>>>,
}

impl AppState {
    /// Create a new [AppState] with an empty ledger that assigns random UUIDs to transactions.
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> AppState<G> {
    /// Create a new [AppState] with an empty ledger that uses `id_generator`
    /// to assign IDs to transactions.
    pub fn with_id_generator(id_generator: G) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(Ledger::new())),
            form_session: Arc::new(Mutex::new(FormSession::new(id_generator))),
        }
    }
}

impl<G> FromRef<AppState<G>> for Arc<Mutex<Ledger>> {
    fn from_ref(state: &AppState<G>) -> Self {
        state.ledger.clone()
    }
}

/// Lock `mutex`, logging and converting a poisoned lock into [Error::LockPoisoned].
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, Error> {
    mutex.lock().map_err(|error| {
        tracing::error!("could not acquire lock: {error}");
        Error::LockPoisoned
    })
}

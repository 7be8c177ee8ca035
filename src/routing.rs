//! Application router configuration.

use std::path::Path;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    internal_server_error::get_internal_server_error_page,
    logging::logging_middleware,
    not_found::get_404_not_found,
    transaction::{
        IdGenerator, change_description_endpoint, change_type_endpoint, change_value_endpoint,
        create_transaction_endpoint, delete_transaction_endpoint, get_transactions_json,
        get_transactions_page,
    },
};

/// Return a router with all the app's routes.
///
/// Static files are served from `static_dir` under [endpoints::STATIC].
pub fn build_router<G>(state: AppState<G>, static_dir: impl AsRef<Path>) -> Router
where
    G: IdGenerator + Clone,
{
    Router::new()
        .route(endpoints::ROOT, get(get_transactions_page::<G>))
        .route(
            endpoints::TRANSACTIONS_API,
            get(get_transactions_json).post(create_transaction_endpoint::<G>),
        )
        .route(endpoints::TRANSACTION, delete(delete_transaction_endpoint))
        .route(endpoints::FORM_TYPE, post(change_type_endpoint::<G>))
        .route(
            endpoints::FORM_DESCRIPTION,
            post(change_description_endpoint::<G>),
        )
        .route(endpoints::FORM_VALUE, post(change_value_endpoint::<G>))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .layer(middleware::from_fn(logging_middleware))
        .nest_service(endpoints::STATIC, ServeDir::new(static_dir.as_ref()))
        .fallback(get_404_not_found)
        .with_state(state)
}

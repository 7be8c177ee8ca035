//! The page to display when the server cannot handle a request.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{endpoints, html::error_view};

const DEFAULT_DESCRIPTION: &str = "Sorry, something went wrong.";
const DEFAULT_FIX: &str = "Try again later or check the server logs";

/// Render the 500 page with a custom `description` of the problem and a
/// suggested `fix` for the user.
pub fn render_internal_server_error(description: &str, fix: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(error_view("Internal Server Error", "500", description, fix).into_string()),
    )
        .into_response()
}

/// A route handler for the generic 500 page.
pub async fn get_internal_server_error_page() -> Response {
    render_internal_server_error(DEFAULT_DESCRIPTION, DEFAULT_FIX)
}

/// Get a response that makes htmx send the browser to the 500 page.
///
/// Use this for errors in htmx requests that leave the server unable to
/// serve any further requests, e.g. a poisoned lock.
pub fn get_internal_server_error_redirect() -> Response {
    (
        HxRedirect(endpoints::INTERNAL_ERROR_VIEW.to_owned()),
        StatusCode::INTERNAL_SERVER_ERROR,
    )
        .into_response()
}

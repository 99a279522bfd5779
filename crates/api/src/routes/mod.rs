//! API route definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::AppState;
use tally_shared::AppError;

pub mod companies;
pub mod health;
pub mod industries;
pub mod invoices;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(companies::routes())
        .merge(industries::routes())
        .merge(invoices::routes())
}

/// Builds a JSON error response from an application error.
pub(crate) fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(json!({
            "error": err.error_code().to_lowercase(),
            "message": err.to_string()
        })),
    )
        .into_response()
}

//! Invoice management routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::AppState;
use crate::routes::error_response;
use tally_db::InvoiceRepository;
use tally_db::entities::invoices;
use tally_db::repositories::invoice::InvoiceError;
use tally_shared::AppError;

/// Request body for creating an invoice.
#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
    /// Code of the company the invoice is billed to.
    pub comp_code: String,
    /// Invoice amount.
    pub amt: Decimal,
}

/// Request body for updating an invoice.
#[derive(Debug, Deserialize)]
pub struct UpdateInvoiceRequest {
    /// New amount.
    pub amt: Decimal,
    /// New payment flag.
    pub paid: bool,
}

/// Creates the invoices router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/invoices", get(list_invoices).post(create_invoice))
        .route(
            "/invoices/{id}",
            get(get_invoice).put(update_invoice).delete(delete_invoice),
        )
}

/// Serializes a full invoice record.
fn invoice_json(invoice: &invoices::Model) -> serde_json::Value {
    json!({
        "id": invoice.id,
        "comp_code": invoice.comp_code,
        "amt": invoice.amt,
        "paid": invoice.paid,
        "add_date": invoice.add_date,
        "paid_date": invoice.paid_date
    })
}

/// GET /invoices - List all invoices.
async fn list_invoices(State(state): State<AppState>) -> impl IntoResponse {
    let invoice_repo = InvoiceRepository::new((*state.db).clone());

    let invoices = match invoice_repo.list().await {
        Ok(i) => i,
        Err(e) => {
            error!(error = %e, "Database error listing invoices");
            return error_response(&AppError::Database(e.to_string()));
        }
    };

    let invoices_json: Vec<_> = invoices
        .iter()
        .map(|invoice| json!({ "id": invoice.id, "comp_code": invoice.comp_code }))
        .collect();

    (StatusCode::OK, Json(json!({ "invoices": invoices_json }))).into_response()
}

/// GET `/invoices/{id}` - Get an invoice with its company.
async fn get_invoice(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    let invoice_repo = InvoiceRepository::new((*state.db).clone());

    let (invoice, company) = match invoice_repo.get_with_company(id).await {
        Ok(pair) => pair,
        Err(InvoiceError::NotFound(_)) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "not_found",
                    "message": format!("No such invoice: {id}")
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Database error fetching invoice");
            return error_response(&AppError::Database(e.to_string()));
        }
    };

    (
        StatusCode::OK,
        Json(json!({
            "invoice": {
                "id": invoice.id,
                "amt": invoice.amt,
                "paid": invoice.paid,
                "add_date": invoice.add_date,
                "paid_date": invoice.paid_date,
                "company": {
                    "code": company.code,
                    "name": company.name,
                    "description": company.description
                }
            }
        })),
    )
        .into_response()
}

/// POST /invoices - Create a new invoice in the unpaid state.
async fn create_invoice(
    State(state): State<AppState>,
    Json(payload): Json<CreateInvoiceRequest>,
) -> impl IntoResponse {
    let invoice_repo = InvoiceRepository::new((*state.db).clone());

    let invoice = match invoice_repo.create(&payload.comp_code, payload.amt).await {
        Ok(i) => i,
        Err(InvoiceError::CompanyNotFound(code)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "company_not_found",
                    "message": format!("Company '{code}' not found")
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Failed to create invoice");
            return error_response(&AppError::Database(e.to_string()));
        }
    };

    info!(
        invoice_id = invoice.id,
        comp_code = %invoice.comp_code,
        "Invoice created"
    );

    (StatusCode::CREATED, Json(json!({ "invoice": invoice_json(&invoice) }))).into_response()
}

/// PUT `/invoices/{id}` - Update an invoice's amount and payment state.
async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInvoiceRequest>,
) -> impl IntoResponse {
    let invoice_repo = InvoiceRepository::new((*state.db).clone());

    let invoice = match invoice_repo
        .apply_payment_update(id, payload.amt, payload.paid)
        .await
    {
        Ok(i) => i,
        Err(InvoiceError::NotFound(_)) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "not_found",
                    "message": format!("No such invoice: {id}")
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Failed to update invoice");
            return error_response(&AppError::Database(e.to_string()));
        }
    };

    info!(
        invoice_id = invoice.id,
        paid = invoice.paid,
        "Invoice updated"
    );

    (StatusCode::OK, Json(json!({ "invoice": invoice_json(&invoice) }))).into_response()
}

/// DELETE `/invoices/{id}` - Delete an invoice.
async fn delete_invoice(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    let invoice_repo = InvoiceRepository::new((*state.db).clone());

    match invoice_repo.delete(id).await {
        Ok(()) => {}
        Err(InvoiceError::NotFound(_)) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "not_found",
                    "message": format!("No such invoice: {id}")
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Failed to delete invoice");
            return error_response(&AppError::Database(e.to_string()));
        }
    }

    info!(invoice_id = id, "Invoice deleted");

    (StatusCode::OK, Json(json!({ "status": "deleted" }))).into_response()
}

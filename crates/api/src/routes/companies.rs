//! Company management routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::AppState;
use crate::routes::error_response;
use tally_core::slug;
use tally_db::CompanyRepository;
use tally_db::repositories::company::{CompanyError, CreateCompanyInput};
use tally_shared::AppError;

/// Request body for creating a company.
#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    /// Display name; the company code is derived from it.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Request body for updating a company.
#[derive(Debug, Deserialize)]
pub struct UpdateCompanyRequest {
    /// New display name.
    pub name: String,
    /// New description.
    pub description: Option<String>,
}

/// Creates the companies router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/companies", get(list_companies).post(create_company))
        .route(
            "/companies/{code}",
            get(get_company).put(update_company).delete(delete_company),
        )
}

/// GET /companies - List all companies.
async fn list_companies(State(state): State<AppState>) -> impl IntoResponse {
    let company_repo = CompanyRepository::new((*state.db).clone());

    let companies = match company_repo.list().await {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "Database error listing companies");
            return error_response(&AppError::Database(e.to_string()));
        }
    };

    let companies_json: Vec<_> = companies
        .iter()
        .map(|company| json!({ "code": company.code, "name": company.name }))
        .collect();

    (StatusCode::OK, Json(json!({ "companies": companies_json }))).into_response()
}

/// GET `/companies/{code}` - Get a company with its invoices and industries.
async fn get_company(State(state): State<AppState>, Path(code): Path<String>) -> impl IntoResponse {
    let company_repo = CompanyRepository::new((*state.db).clone());

    let detail = match company_repo.get_detail(&code).await {
        Ok(d) => d,
        Err(CompanyError::NotFound(_)) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "not_found",
                    "message": format!("Company '{code}' not found")
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Database error fetching company");
            return error_response(&AppError::Database(e.to_string()));
        }
    };

    (
        StatusCode::OK,
        Json(json!({
            "company": {
                "code": detail.company.code,
                "name": detail.company.name,
                "description": detail.company.description,
                "invoices": detail.invoice_ids,
                "industries": detail.industries
            }
        })),
    )
        .into_response()
}

/// POST /companies - Create a new company.
///
/// The canonical code is derived from the display name.
async fn create_company(
    State(state): State<AppState>,
    Json(payload): Json<CreateCompanyRequest>,
) -> impl IntoResponse {
    let code = match slug::normalize(&payload.name) {
        Ok(c) => c,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_name",
                    "message": e.to_string()
                })),
            )
                .into_response();
        }
    };

    let company_repo = CompanyRepository::new((*state.db).clone());

    let company = match company_repo
        .create(CreateCompanyInput {
            code,
            name: payload.name,
            description: payload.description,
        })
        .await
    {
        Ok(c) => c,
        Err(CompanyError::DuplicateCode(code)) => {
            return (
                StatusCode::CONFLICT,
                Json(json!({
                    "error": "duplicate_code",
                    "message": format!("Company code '{code}' already exists")
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Failed to create company");
            return error_response(&AppError::Database(e.to_string()));
        }
    };

    info!(code = %company.code, "Company created");

    (
        StatusCode::CREATED,
        Json(json!({
            "company": {
                "code": company.code,
                "name": company.name,
                "description": company.description
            }
        })),
    )
        .into_response()
}

/// PUT `/companies/{code}` - Update a company's name and description.
async fn update_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(payload): Json<UpdateCompanyRequest>,
) -> impl IntoResponse {
    let company_repo = CompanyRepository::new((*state.db).clone());

    let company = match company_repo
        .update(&code, &payload.name, payload.description)
        .await
    {
        Ok(c) => c,
        Err(CompanyError::InvalidName) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_name",
                    "message": "Company name must not be empty"
                })),
            )
                .into_response();
        }
        Err(CompanyError::NotFound(_)) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "not_found",
                    "message": format!("Company '{code}' not found")
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Failed to update company");
            return error_response(&AppError::Database(e.to_string()));
        }
    };

    info!(code = %company.code, "Company updated");

    (
        StatusCode::OK,
        Json(json!({
            "company": {
                "code": company.code,
                "name": company.name,
                "description": company.description
            }
        })),
    )
        .into_response()
}

/// DELETE `/companies/{code}` - Delete a company.
async fn delete_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> impl IntoResponse {
    let company_repo = CompanyRepository::new((*state.db).clone());

    match company_repo.delete(&code).await {
        Ok(()) => {}
        Err(CompanyError::NotFound(_)) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "not_found",
                    "message": format!("Company '{code}' not found")
                })),
            )
                .into_response();
        }
        Err(CompanyError::HasInvoices(count)) => {
            return (
                StatusCode::CONFLICT,
                Json(json!({
                    "error": "has_invoices",
                    "message": format!("Cannot delete company: {count} invoices reference it")
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Failed to delete company");
            return error_response(&AppError::Database(e.to_string()));
        }
    }

    info!(code = %code, "Company deleted");

    (StatusCode::OK, Json(json!({ "status": "deleted" }))).into_response()
}

//! Industry management routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::AppState;
use crate::routes::error_response;
use tally_core::slug;
use tally_db::IndustryRepository;
use tally_db::repositories::industry::IndustryError;
use tally_shared::AppError;

/// Request body for creating an industry.
#[derive(Debug, Deserialize)]
pub struct CreateIndustryRequest {
    /// Display name; the industry code is derived from it.
    pub name: String,
}

/// Request body for linking a company to an industry.
#[derive(Debug, Deserialize)]
pub struct LinkCompanyRequest {
    /// Code of the company to link.
    pub comp_code: String,
}

/// Creates the industries router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/industries", get(list_industries).post(create_industry))
        .route("/industries/{code}/companies", post(link_company))
}

/// GET /industries - List all industries with their company codes.
async fn list_industries(State(state): State<AppState>) -> impl IntoResponse {
    let industry_repo = IndustryRepository::new((*state.db).clone());

    let industries = match industry_repo.list_with_companies().await {
        Ok(i) => i,
        Err(e) => {
            error!(error = %e, "Database error listing industries");
            return error_response(&AppError::Database(e.to_string()));
        }
    };

    let industries_json: Vec<_> = industries
        .iter()
        .map(|entry| {
            json!({
                "code": entry.industry.code,
                "name": entry.industry.name,
                "companies": entry.company_codes
            })
        })
        .collect();

    (StatusCode::OK, Json(json!({ "industries": industries_json }))).into_response()
}

/// POST /industries - Create a new industry.
///
/// The canonical code is derived from the display name.
async fn create_industry(
    State(state): State<AppState>,
    Json(payload): Json<CreateIndustryRequest>,
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

    let industry_repo = IndustryRepository::new((*state.db).clone());

    let industry = match industry_repo.create(&code, &payload.name).await {
        Ok(i) => i,
        Err(IndustryError::DuplicateCode(code)) => {
            return (
                StatusCode::CONFLICT,
                Json(json!({
                    "error": "duplicate_code",
                    "message": format!("Industry code '{code}' already exists")
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Failed to create industry");
            return error_response(&AppError::Database(e.to_string()));
        }
    };

    info!(code = %industry.code, "Industry created");

    (
        StatusCode::CREATED,
        Json(json!({
            "industry": {
                "code": industry.code,
                "name": industry.name
            }
        })),
    )
        .into_response()
}

/// POST `/industries/{code}/companies` - Link a company to an industry.
async fn link_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(payload): Json<LinkCompanyRequest>,
) -> impl IntoResponse {
    let industry_repo = IndustryRepository::new((*state.db).clone());

    let link = match industry_repo.link_company(&code, &payload.comp_code).await {
        Ok(l) => l,
        Err(IndustryError::NotFound(code)) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "not_found",
                    "message": format!("Industry '{code}' not found")
                })),
            )
                .into_response();
        }
        Err(IndustryError::CompanyNotFound(code)) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "company_not_found",
                    "message": format!("Company '{code}' not found")
                })),
            )
                .into_response();
        }
        Err(IndustryError::AlreadyLinked { ind_code, comp_code }) => {
            return (
                StatusCode::CONFLICT,
                Json(json!({
                    "error": "already_linked",
                    "message": format!(
                        "Company '{comp_code}' is already linked to industry '{ind_code}'"
                    )
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Failed to link company to industry");
            return error_response(&AppError::Database(e.to_string()));
        }
    };

    info!(
        ind_code = %link.ind_code,
        comp_code = %link.comp_code,
        "Company linked to industry"
    );

    (
        StatusCode::CREATED,
        Json(json!({
            "link": {
                "ind_code": link.ind_code,
                "comp_code": link.comp_code
            }
        })),
    )
        .into_response()
}

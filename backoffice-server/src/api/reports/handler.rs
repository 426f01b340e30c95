//! Report handlers

use axum::extract::{Path, State};
use shared::ApiResponse;
use shared::models::{Report, ReportCreate, ReportUpdate};

use crate::api::{ApiJson, ApiResult};
use crate::state::AppState;
use crate::utils::validation;

/// POST /api/reports
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ReportCreate>,
) -> ApiResult<Report> {
    let draft = validation::report_draft(payload)?;
    let report = state.reports.create(draft).await?;
    Ok(ApiResponse::created("Report created successfully", report))
}

/// GET /api/reports
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Report>> {
    let reports = state.reports.list().await?;
    Ok(ApiResponse::ok("Reports retrieved successfully", reports))
}

/// GET /api/reports/{id}
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Report> {
    let report = state.reports.get(id).await?;
    Ok(ApiResponse::ok("Report retrieved successfully", report))
}

/// PUT /api/reports/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(payload): ApiJson<ReportUpdate>,
) -> ApiResult<Report> {
    let draft = validation::report_draft(payload)?;
    let report = state.reports.update(id, draft).await?;
    Ok(ApiResponse::ok("Report updated successfully", report))
}

/// DELETE /api/reports/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<()> {
    state.reports.delete(id).await?;
    Ok(ApiResponse::message("Report deleted successfully"))
}

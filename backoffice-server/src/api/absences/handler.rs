//! Attendance handlers

use axum::extract::{Path, State};
use shared::ApiResponse;
use shared::models::{Attendance, AttendanceUpdate, ClockInRequest};

use crate::api::{ApiJson, ApiResult};
use crate::auth::CurrentUser;
use crate::state::AppState;
use crate::utils::validation;

/// POST /api/absences/clock-in - records the caller's clock-in
pub async fn clock_in(
    State(state): State<AppState>,
    current_user: CurrentUser,
    ApiJson(payload): ApiJson<ClockInRequest>,
) -> ApiResult<Attendance> {
    let input = validation::clock_in(payload)?;
    let record = state
        .attendance
        .record_clock_in(&current_user, input)
        .await?;
    Ok(ApiResponse::created("Absence recorded successfully", record))
}

/// GET /api/absences - newest first
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Attendance>> {
    let records = state.attendance.list().await?;
    Ok(ApiResponse::ok("Absences retrieved successfully", records))
}

/// GET /api/absences/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Attendance> {
    let record = state.attendance.get(id).await?;
    Ok(ApiResponse::ok("Absence retrieved successfully", record))
}

/// PUT /api/absences/{id} - only the weather can change
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(payload): ApiJson<AttendanceUpdate>,
) -> ApiResult<Attendance> {
    let weather = validation::weather_update(payload)?;
    let record = state.attendance.update_weather(id, &weather).await?;
    Ok(ApiResponse::ok("Absence updated successfully", record))
}

/// DELETE /api/absences/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<()> {
    state.attendance.delete(id).await?;
    Ok(ApiResponse::message("Absence deleted successfully"))
}

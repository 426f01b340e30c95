//! Register / login handlers

use axum::extract::State;
use shared::models::{Account, LoginRequest, LoginResponse, RegisterRequest};

use crate::api::{ApiJson, ApiResult};
use crate::state::AppState;
use crate::utils::validation;
use shared::ApiResponse;

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> ApiResult<Account> {
    let input = validation::registration(payload)?;
    let account = state.accounts.register(input).await?;
    Ok(ApiResponse::created("User registered successfully", account))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let input = validation::credentials(payload)?;
    let response = state.accounts.login(input).await?;
    Ok(ApiResponse::ok("Login successful", response))
}

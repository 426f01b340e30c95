//! Account administration handlers

use axum::extract::{Path, State};
use shared::ApiResponse;
use shared::models::{Account, AccountUpdate};

use crate::api::{ApiJson, ApiResult};
use crate::auth::CurrentUser;
use crate::state::AppState;
use crate::utils::validation;

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Account>> {
    let accounts = state.accounts.list().await?;
    Ok(ApiResponse::ok("Users retrieved successfully", accounts))
}

/// PUT /api/users/{id} - partial: only supplied fields change
pub async fn update(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    ApiJson(payload): ApiJson<AccountUpdate>,
) -> ApiResult<Account> {
    let changes = validation::account_changes(payload)?;
    let account = state.accounts.update(id, changes).await?;

    tracing::info!(account_id = id, operator_id = current_user.id, "Account updated");
    Ok(ApiResponse::ok("User updated successfully", account))
}

/// DELETE /api/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<()> {
    state.accounts.delete(id).await?;

    tracing::info!(account_id = id, operator_id = current_user.id, "Account removed");
    Ok(ApiResponse::message("User deleted successfully"))
}

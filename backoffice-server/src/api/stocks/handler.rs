//! Stock handlers

use axum::extract::{Path, State};
use shared::ApiResponse;
use shared::models::{Stock, StockCreate, StockPatch, StockUpdate};

use crate::api::{ApiJson, ApiResult};
use crate::state::AppState;
use crate::utils::validation;

/// POST /api/stocks - also books the sale in the report ledger
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<StockCreate>,
) -> ApiResult<Stock> {
    let draft = validation::stock_draft(payload)?;
    let stock = state.stocks.create(draft).await?;
    Ok(ApiResponse::created("Stock created successfully", stock))
}

/// GET /api/stocks
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Stock>> {
    let stocks = state.stocks.list().await?;
    Ok(ApiResponse::ok("Stocks retrieved successfully", stocks))
}

/// GET /api/stocks/{id}
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Stock> {
    let stock = state.stocks.get(id).await?;
    Ok(ApiResponse::ok("Stock retrieved successfully", stock))
}

/// PUT /api/stocks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(payload): ApiJson<StockUpdate>,
) -> ApiResult<Stock> {
    let draft = validation::stock_draft(payload)?;
    let stock = state.stocks.update(id, draft).await?;
    Ok(ApiResponse::ok("Stock updated successfully", stock))
}

/// PATCH /api/stocks/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(payload): ApiJson<StockPatch>,
) -> ApiResult<Stock> {
    let stock = state.stocks.patch(id, payload).await?;
    Ok(ApiResponse::ok("Stock updated successfully", stock))
}

/// DELETE /api/stocks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<()> {
    state.stocks.delete(id).await?;
    Ok(ApiResponse::message("Stock deleted successfully"))
}

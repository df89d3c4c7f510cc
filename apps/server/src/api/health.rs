use std::sync::Arc;

use crate::{main_lib::AppState, models::BoardStatusResponse};
use axum::{extract::State, Json};

#[utoipa::path(get, path = "/api/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[utoipa::path(get, path = "/api/readyz", responses((status = 200, description = "Ready")))]
pub async fn readyz() -> &'static str {
    "ok"
}

#[utoipa::path(get, path = "/api/status", responses((status = 200, body = BoardStatusResponse)))]
pub async fn board_status(State(state): State<Arc<AppState>>) -> Json<BoardStatusResponse> {
    Json(state.coin_board_service.status().await.into())
}

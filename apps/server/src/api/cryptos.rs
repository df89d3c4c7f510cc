use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{Crypto, MessageResponse, TopGainerLoser},
};
use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use coinboard_core::{constants::SNAPSHOT_FILE_NAME, coins::SortOrder};

#[utoipa::path(get, path = "/api/cryptos", responses((status = 200, body = [Crypto])))]
pub async fn list_cryptos(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Crypto>>> {
    let records = state.coin_board_service.list().await;
    Ok(Json(records.into_iter().map(Crypto::from).collect()))
}

#[derive(serde::Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    symbol: String,
}

#[utoipa::path(
    get,
    path = "/api/cryptos/search",
    params(("symbol" = String, Query, description = "Symbol, any casing")),
    responses((status = 200, body = Crypto), (status = 404, body = MessageResponse))
)]
pub async fn search_crypto(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SearchQuery>,
) -> ApiResult<Json<Crypto>> {
    let record = state.coin_board_service.search(&q.symbol).await?;
    Ok(Json(record.into()))
}

#[derive(serde::Deserialize)]
pub struct SortQuery {
    order: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/cryptos/sort",
    params(("order" = Option<String>, Query, description = "asc (default); anything else sorts descending")),
    responses((status = 200, body = [Crypto]))
)]
pub async fn sort_cryptos(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SortQuery>,
) -> ApiResult<Json<Vec<Crypto>>> {
    let order = SortOrder::parse(q.order.as_deref());
    let records = state.coin_board_service.sort(order).await;
    Ok(Json(records.into_iter().map(Crypto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/cryptos/top-gainer-loser",
    responses((status = 200, body = TopGainerLoser), (status = 400, body = MessageResponse))
)]
pub async fn top_gainer_loser(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TopGainerLoser>> {
    let result = state.coin_board_service.top_gainer_loser().await?;
    Ok(Json(result.into()))
}

#[utoipa::path(
    get,
    path = "/api/cryptos/download",
    responses((status = 200, content_type = "text/csv", description = "Board as CSV attachment"))
)]
pub async fn download_csv(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let body = state.coin_board_service.export_csv().await?;
    let headers = [
        (header::CONTENT_TYPE, "text/csv".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", SNAPSHOT_FILE_NAME),
        ),
    ];
    Ok((headers, body))
}

#[utoipa::path(
    get,
    path = "/api/cryptos/fetch",
    responses((status = 200, body = MessageResponse), (status = 500, body = MessageResponse))
)]
pub async fn fetch_cryptos(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MessageResponse>> {
    let count = state.coin_board_service.refresh().await?;
    tracing::debug!("Fetched {} cryptos", count);
    Ok(Json(MessageResponse::new("Crypto data fetched successfully!")))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/cryptos", get(list_cryptos))
        .route("/cryptos/search", get(search_crypto))
        .route("/cryptos/sort", get(sort_cryptos))
        .route("/cryptos/top-gainer-loser", get(top_gainer_loser))
        .route("/cryptos/download", get(download_csv))
        .route("/cryptos/fetch", get(fetch_cryptos))
}

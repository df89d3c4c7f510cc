mod cryptos;
mod health;
mod view;

use std::sync::Arc;

use crate::{
    config::Config,
    main_lib::AppState,
    models::{BoardStatusResponse, Crypto, MessageResponse, TopGainerLoser},
};
use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

pub use health::{healthz, readyz};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::readyz,
        health::board_status,
        cryptos::list_cryptos,
        cryptos::search_crypto,
        cryptos::sort_cryptos,
        cryptos::top_gainer_loser,
        cryptos::download_csv,
        cryptos::fetch_cryptos,
    ),
    components(schemas(Crypto, TopGainerLoser, MessageResponse, BoardStatusResponse)),
    tags((name = "coinboard"))
)]
pub struct ApiDoc;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/status", get(health::board_status))
        .merge(cryptos::router());

    Router::new()
        .route("/", get(view::index))
        .nest("/api", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(state)
        .layer(cors)
        // Set must wrap Propagate so the generated id reaches the response.
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}

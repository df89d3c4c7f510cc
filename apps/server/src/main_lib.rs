use std::sync::Arc;

use crate::config::Config;
use coinboard_core::coins::{CoinBoardService, CoinBoardServiceTrait, CsvFileSnapshotWriter};
use coinboard_market_data::{CoinGeckoProvider, PriceProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub coin_board_service: Arc<dyn CoinBoardServiceTrait + Send + Sync>,
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = Arc::new(CoinGeckoProvider::with_base_url(
        config.upstream_url.clone(),
        config.upstream_timeout,
    ));
    tracing::info!(
        "Price upstream: {} (timeout {:?})",
        config.upstream_url,
        config.upstream_timeout
    );
    build_state_with_provider(config, provider)
}

pub fn build_state_with_provider(
    config: &Config,
    provider: Arc<dyn PriceProvider>,
) -> anyhow::Result<Arc<AppState>> {
    tracing::info!("Snapshot path in use: {}", config.snapshot_path.display());
    let snapshot_writer = Arc::new(CsvFileSnapshotWriter::new(config.snapshot_path.clone()));
    let coin_board_service = Arc::new(CoinBoardService::new(provider, snapshot_writer));

    Ok(Arc::new(AppState { coin_board_service }))
}

//! Coin board service implementation.
//!
//! The board is replaced wholesale on refresh and reordered in place by sort.
//! Readers take the read lock, so they never observe a half-replaced or
//! half-sorted board.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};
use tokio::sync::{Mutex, RwLock};

use coinboard_market_data::{CoinId, PriceProvider};

use crate::constants::{DEFAULT_COIN_IDS, QUOTE_CURRENCY};
use crate::errors::{Error, Result};

use super::coins_model::{BoardStatus, CoinRecord, GainerLoser, SortOrder};
use super::coins_queries::{find_by_symbol, sort_by_price, top_gainer_loser};
use super::coins_traits::{CoinBoardServiceTrait, SnapshotWriterTrait};
use super::csv_export::render_csv;

#[derive(Default)]
struct Board {
    records: Vec<CoinRecord>,
    refreshed_at: Option<DateTime<Utc>>,
}

pub struct CoinBoardService {
    provider: Arc<dyn PriceProvider>,
    snapshot_writer: Arc<dyn SnapshotWriterTrait>,
    coin_ids: Vec<CoinId>,
    vs_currency: String,
    board: RwLock<Board>,
    /// Serializes refreshes so board replacement and snapshot writes land in the same order.
    refresh_lock: Mutex<()>,
}

impl CoinBoardService {
    pub fn new(
        provider: Arc<dyn PriceProvider>,
        snapshot_writer: Arc<dyn SnapshotWriterTrait>,
    ) -> Self {
        CoinBoardService {
            provider,
            snapshot_writer,
            coin_ids: DEFAULT_COIN_IDS.iter().map(|id| id.to_string()).collect(),
            vs_currency: QUOTE_CURRENCY.to_string(),
            board: RwLock::new(Board::default()),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Replaces the coin id list priced on refresh.
    pub fn with_coin_ids(mut self, coin_ids: Vec<CoinId>) -> Self {
        self.coin_ids = coin_ids;
        self
    }
}

#[async_trait]
impl CoinBoardServiceTrait for CoinBoardService {
    /// Pulls fresh prices and replaces the board, then writes the snapshot.
    ///
    /// An upstream failure leaves the board and the snapshot untouched. A
    /// snapshot failure is logged and does not fail the refresh.
    async fn refresh(&self) -> Result<usize> {
        let _guard = self.refresh_lock.lock().await;

        debug!(
            "Refreshing {} coins from {}",
            self.coin_ids.len(),
            self.provider.id()
        );

        let prices = self
            .provider
            .get_simple_prices(&self.coin_ids, &self.vs_currency)
            .await
            .map_err(|e| {
                warn!("Price refresh from {} failed: {}", self.provider.id(), e);
                Error::from(e)
            })?;

        let mut records: Vec<CoinRecord> = prices.into_iter().map(CoinRecord::from).collect();
        records.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        let count = records.len();

        {
            let mut board = self.board.write().await;
            board.records = records.clone();
            board.refreshed_at = Some(Utc::now());
        }
        info!("Board refreshed with {} coins", count);

        if let Err(e) = self.snapshot_writer.write_snapshot(&records).await {
            error!("Error writing CSV snapshot: {}", e);
        }

        Ok(count)
    }

    async fn list(&self) -> Vec<CoinRecord> {
        self.board.read().await.records.clone()
    }

    async fn search(&self, symbol: &str) -> Result<CoinRecord> {
        let board = self.board.read().await;
        find_by_symbol(&board.records, symbol)
            .cloned()
            .ok_or_else(|| Error::NotFound(symbol.to_string()))
    }

    async fn sort(&self, order: SortOrder) -> Vec<CoinRecord> {
        let mut board = self.board.write().await;
        sort_by_price(&mut board.records, order);
        board.records.clone()
    }

    async fn top_gainer_loser(&self) -> Result<GainerLoser> {
        let board = self.board.read().await;
        top_gainer_loser(&board.records).ok_or(Error::NoData)
    }

    async fn export_csv(&self) -> Result<Vec<u8>> {
        let board = self.board.read().await;
        render_csv(&board.records)
    }

    async fn status(&self) -> BoardStatus {
        let board = self.board.read().await;
        BoardStatus {
            count: board.records.len(),
            refreshed_at: board.refreshed_at,
        }
    }
}

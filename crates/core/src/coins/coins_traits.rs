use crate::coins::coins_model::{BoardStatus, CoinRecord, GainerLoser, SortOrder};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for the CSV snapshot destination
#[async_trait]
pub trait SnapshotWriterTrait: Send + Sync {
    async fn write_snapshot(&self, records: &[CoinRecord]) -> Result<()>;
}

/// Trait for coin board service operations
#[async_trait]
pub trait CoinBoardServiceTrait: Send + Sync {
    async fn refresh(&self) -> Result<usize>;
    async fn list(&self) -> Vec<CoinRecord>;
    async fn search(&self, symbol: &str) -> Result<CoinRecord>;
    async fn sort(&self, order: SortOrder) -> Vec<CoinRecord>;
    async fn top_gainer_loser(&self) -> Result<GainerLoser>;
    async fn export_csv(&self) -> Result<Vec<u8>>;
    async fn status(&self) -> BoardStatus;
}

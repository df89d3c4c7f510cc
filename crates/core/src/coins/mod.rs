//! Coins module - board records, queries, CSV snapshot and the board service.

mod coins_model;
mod coins_queries;
mod coins_service;
mod coins_traits;
mod csv_export;


pub use coins_model::{title_case, BoardStatus, CoinRecord, GainerLoser, SortOrder};
pub use coins_queries::{find_by_symbol, sort_by_price, top_gainer_loser};
pub use coins_service::CoinBoardService;
pub use coins_traits::{CoinBoardServiceTrait, SnapshotWriterTrait};
pub use csv_export::{render_csv, CsvFileSnapshotWriter};

//! Coinboard Market Data Crate
//!
//! This crate fetches spot prices for a set of crypto assets from an
//! upstream price API and hands them back as plain typed records.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |   Core / Board   |  (fixed coin id list, quote currency)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  PriceProvider   |  (CoinGecko, test doubles)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |   SimplePrice    |  (price + 24h change per coin id)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`PriceProvider`] - Trait every upstream implements
//! - [`CoinGeckoProvider`] - The `simple/price` CoinGecko client
//! - [`SimplePrice`] - One decoded price entry
//! - [`MarketDataError`] - Failures of an upstream call

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{CoinId, SimplePrice};
pub use provider::coingecko::{CoinGeckoProvider, COINGECKO_BASE_URL};
pub use provider::PriceProvider;

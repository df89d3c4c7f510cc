//! Coinboard Core - price board state, refresh orchestration and queries.
//!
//! This crate owns the in-memory board of coin records. It pulls prices
//! through a `PriceProvider` from the `market-data` crate, keeps the latest
//! board behind a lock, and writes a CSV snapshot after each refresh.

pub mod coins;
pub mod constants;
pub mod errors;

pub use coins::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

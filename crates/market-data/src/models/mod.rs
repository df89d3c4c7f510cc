//! Market data models
//!
//! - `quote` - Decoded price entries (SimplePrice) and the CoinId alias

mod quote;

pub use quote::{CoinId, SimplePrice};

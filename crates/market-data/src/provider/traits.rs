//! Price provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{CoinId, SimplePrice};

/// Trait for upstream price providers.
///
/// A provider answers one batched request for every coin id at once. It never
/// retries; a failure is reported to the caller as-is.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use coinboard_market_data::{MarketDataError, PriceProvider, SimplePrice};
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl PriceProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn get_simple_prices(
///         &self,
///         coin_ids: &[CoinId],
///         _vs_currency: &str,
///     ) -> Result<Vec<SimplePrice>, MarketDataError> {
///         Ok(coin_ids.iter().map(|id| SimplePrice::new(id.clone(), 1.0, 0.0)).collect())
///     }
/// }
/// ```
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch the current price and 24h change for each coin id.
    ///
    /// # Arguments
    ///
    /// * `coin_ids` - Upstream identifiers to price
    /// * `vs_currency` - Quote currency code (e.g. "usd")
    ///
    /// # Returns
    ///
    /// One entry per identifier the upstream knows about. Unknown ids are
    /// silently absent, which mirrors what the upstream itself does.
    async fn get_simple_prices(
        &self,
        coin_ids: &[CoinId],
        vs_currency: &str,
    ) -> Result<Vec<SimplePrice>, MarketDataError>;
}

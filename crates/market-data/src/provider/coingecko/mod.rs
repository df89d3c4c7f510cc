//! CoinGecko market data provider implementation.
//!
//! Prices come from the public `simple/price` endpoint, one request for the
//! whole coin list:
//!
//! `GET /simple/price?ids=bitcoin,ethereum&vs_currencies=usd&include_24hr_change=true`
//!
//! API documentation: https://docs.coingecko.com/reference/simple-price

mod models;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::{CoinId, SimplePrice};
use crate::provider::PriceProvider;

use models::{change_key, SimplePriceResponse};

pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";
const PROVIDER_ID: &str = "COINGECKO";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// CoinGecko price provider.
///
/// The free API needs no key. Every call is bounded by the client timeout;
/// an expired timeout surfaces as [`MarketDataError::Timeout`].
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
}

impl CoinGeckoProvider {
    /// Create a provider against the public CoinGecko API.
    pub fn new() -> Self {
        Self::with_base_url(COINGECKO_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Create a provider against a custom base URL (mirrors, local stubs).
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/simple/price", self.base_url)
    }

    /// Make the `simple/price` GET request and return the raw body.
    async fn fetch(&self, ids: &str, vs_currency: &str) -> Result<String, MarketDataError> {
        let url = self.endpoint();

        debug!("CoinGecko request: {} ids={} vs={}", url, ids, vs_currency);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ids", ids),
                ("vs_currencies", vs_currency),
                ("include_24hr_change", "true"),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MarketDataError::Timeout {
                        provider: PROVIDER_ID.to_string(),
                    }
                } else {
                    MarketDataError::ProviderError {
                        provider: PROVIDER_ID.to_string(),
                        message: format!("Request failed: {}", e),
                    }
                }
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, body),
            });
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("Failed to read response: {}", e),
                }
            }
        })
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceProvider for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_simple_prices(
        &self,
        coin_ids: &[CoinId],
        vs_currency: &str,
    ) -> Result<Vec<SimplePrice>, MarketDataError> {
        if coin_ids.is_empty() {
            return Ok(Vec::new());
        }

        let text = self.fetch(&coin_ids.join(","), vs_currency).await?;
        let prices = parse_simple_prices(&text, vs_currency)?;

        if prices.len() < coin_ids.len() {
            warn!(
                "CoinGecko returned {} of {} requested coins",
                prices.len(),
                coin_ids.len()
            );
        }
        debug!("CoinGecko: decoded {} prices", prices.len());

        Ok(prices)
    }
}

/// Decode a `simple/price` body into typed entries, ordered by coin id.
///
/// A missing or null price or change decodes as 0, so every coin the
/// upstream returned lands on the board. A body of the wrong shape or a
/// negative price rejects the whole call.
fn parse_simple_prices(text: &str, vs_currency: &str) -> Result<Vec<SimplePrice>, MarketDataError> {
    let response: SimplePriceResponse =
        serde_json::from_str(text).map_err(|e| MarketDataError::MalformedResponse {
            provider: PROVIDER_ID.to_string(),
            message: format!("Failed to parse simple price response: {}", e),
        })?;

    let change_field = change_key(vs_currency);
    let mut prices = Vec::with_capacity(response.len());

    for (coin_id, fields) in response {
        let price = match fields.get(vs_currency).copied().flatten() {
            Some(price) => price,
            None => {
                warn!("CoinGecko: no {} price for {}, using 0", vs_currency, coin_id);
                0.0
            }
        };

        if !price.is_finite() || price < 0.0 {
            return Err(MarketDataError::MalformedResponse {
                provider: PROVIDER_ID.to_string(),
                message: format!("invalid {} price for {}: {}", vs_currency, coin_id, price),
            });
        }

        let change_24h = fields
            .get(&change_field)
            .copied()
            .flatten()
            .filter(|c| c.is_finite())
            .unwrap_or(0.0);

        prices.push(SimplePrice {
            coin_id,
            price,
            change_24h,
        });
    }

    Ok(prices)
}

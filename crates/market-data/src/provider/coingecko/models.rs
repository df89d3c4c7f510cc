//! CoinGecko API response models.
//!
//! `simple/price` answers with an object keyed by coin id, each value an
//! object keyed by `<currency>` and `<currency>_24h_change`:
//!
//! ```json
//! {"bitcoin": {"usd": 67012.0, "usd_24h_change": -1.52}}
//! ```

use std::collections::BTreeMap;

/// Raw `simple/price` body. Values are nullable upstream (change is `null`
/// for freshly listed coins).
pub type SimplePriceResponse = BTreeMap<String, BTreeMap<String, Option<f64>>>;

/// Key holding the 24h change for a quote currency.
pub fn change_key(vs_currency: &str) -> String {
    format!("{}_24h_change", vs_currency)
}

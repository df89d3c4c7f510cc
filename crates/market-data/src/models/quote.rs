/// Upstream asset identifier (e.g. "bitcoin", "shiba-inu").
pub type CoinId = String;

/// Spot price of one coin in the requested quote currency.
#[derive(Clone, Debug, PartialEq)]
pub struct SimplePrice {
    /// Identifier the upstream keyed this entry by
    pub coin_id: CoinId,

    /// Current price in the quote currency
    pub price: f64,

    /// 24 hour change in percent; 0 when the upstream sent none
    pub change_24h: f64,
}

impl SimplePrice {
    pub fn new(coin_id: impl Into<CoinId>, price: f64, change_24h: f64) -> Self {
        Self {
            coin_id: coin_id.into(),
            price,
            change_24h,
        }
    }
}

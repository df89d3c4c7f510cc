//! Coin board domain models.

use chrono::{DateTime, Utc};

use coinboard_market_data::SimplePrice;

/// One coin on the board.
///
/// The 24h change stays numeric; it is only turned into `"-3.42%"` text at
/// the response and CSV boundary through [`CoinRecord::change_display`].
#[derive(Debug, Clone, PartialEq)]
pub struct CoinRecord {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price: f64,
    pub change_percent: f64,
}

impl CoinRecord {
    pub fn new(id: &str, price: f64, change_percent: f64) -> Self {
        Self {
            id: id.to_string(),
            name: title_case(id),
            symbol: id.to_uppercase(),
            price,
            change_percent,
        }
    }

    /// Change formatted with two decimals and a trailing percent sign.
    pub fn change_display(&self) -> String {
        format!("{:.2}%", self.change_percent)
    }

    /// Price formatted with two decimals, as written to CSV.
    pub fn price_display(&self) -> String {
        format!("{:.2}", self.price)
    }
}

impl From<SimplePrice> for CoinRecord {
    fn from(price: SimplePrice) -> Self {
        CoinRecord::new(&price.coin_id, price.price, price.change_24h)
    }
}

/// Capitalizes the first letter of every word of a coin id.
///
/// Any character other than a letter, digit or underscore starts a new word,
/// so `shiba-inu` becomes `Shiba-Inu`.
pub fn title_case(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    let mut word_start = true;
    for ch in id.chars() {
        if word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        word_start = !(ch.is_alphanumeric() || ch == '_');
    }
    out
}

/// Direction for ordering the board by price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parses the `order` query value. Absent means ascending; `asc` is
    /// ascending; every other value, including an empty one, is descending.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("asc") => SortOrder::Asc,
            Some(_) => SortOrder::Desc,
        }
    }
}

/// Highest and lowest 24h change on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct GainerLoser {
    pub top_gainer: CoinRecord,
    pub top_loser: CoinRecord,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardStatus {
    pub count: usize,
    pub refreshed_at: Option<DateTime<Utc>>,
}

use chrono::{DateTime, Utc};
use coinboard_core::coins as core_coins;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire shape of a board record. `change` is the formatted 24h change.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Crypto {
    pub name: String,
    pub symbol: String,
    pub price: f64,
    pub change: String,
}

impl From<core_coins::CoinRecord> for Crypto {
    fn from(r: core_coins::CoinRecord) -> Self {
        let change = r.change_display();
        Self {
            name: r.name,
            symbol: r.symbol,
            price: r.price,
            change,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct TopGainerLoser {
    pub top_gainer: Crypto,
    pub top_loser: Crypto,
}

impl From<core_coins::GainerLoser> for TopGainerLoser {
    fn from(g: core_coins::GainerLoser) -> Self {
        Self {
            top_gainer: g.top_gainer.into(),
            top_loser: g.top_loser.into(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BoardStatusResponse {
    pub count: usize,
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl From<core_coins::BoardStatus> for BoardStatusResponse {
    fn from(s: core_coins::BoardStatus) -> Self {
        Self {
            count: s.count,
            refreshed_at: s.refreshed_at,
        }
    }
}

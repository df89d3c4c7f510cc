//! Core error types for the Coinboard application.
//!
//! Market data failures are folded into two classes here: the upstream could
//! not be reached, or it answered with something that would not decode.

use thiserror::Error;

use coinboard_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for board operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Upstream price API unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Failed to decode upstream response: {0}")]
    Decode(String),

    #[error("Crypto not found: {0}")]
    NotFound(String),

    #[error("No crypto data available")]
    NoData,

    #[error("Snapshot write failed: {0}")]
    Snapshot(String),
}

impl From<MarketDataError> for Error {
    fn from(err: MarketDataError) -> Self {
        if err.is_decode_error() {
            Error::Decode(err.to_string())
        } else {
            Error::UpstreamUnavailable(err.to_string())
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Snapshot(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Snapshot(err.to_string())
    }
}

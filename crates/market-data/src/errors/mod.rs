//! Error types for the market data crate.
//!
//! Every variant is terminal for the call that produced it. Callers use
//! [`MarketDataError::is_decode_error`] to tell a reachable upstream that sent
//! garbage apart from an upstream that could not be reached at all.

use thiserror::Error;

/// Errors that can occur while fetching prices from a provider.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The provider could not be reached or answered with a non-success status.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider answered, but the body was not in the expected shape.
    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        /// The provider that sent the body
        provider: String,
        /// What failed to decode
        message: String,
    },
}

impl MarketDataError {
    /// Returns true when the upstream answered but the payload could not be decoded.
    pub fn is_decode_error(&self) -> bool {
        match self {
            Self::MalformedResponse { .. } => true,
            Self::Timeout { .. } | Self::RateLimited { .. } | Self::ProviderError { .. } => false,
        }
    }
}

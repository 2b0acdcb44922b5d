//! Error types for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all market data operations
//! - [`ErrorClass`]: Coarse classification used at the HTTP boundary

mod class;

pub use class::ErrorClass;

use thiserror::Error;

/// Errors that can occur during market data operations.
///
/// Each variant is classified into an [`ErrorClass`] via the [`class`](Self::class)
/// method, which determines the status the HTTP layer answers with.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The search query was empty or otherwise unusable.
    /// Rejected before any provider is contacted.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The symbol requires a paid provider plan, or the provider
    /// answered 403 for it.
    #[error("Access denied for symbol: {symbol}")]
    AccessDenied {
        /// The symbol the provider refused to serve
        symbol: String,
    },

    /// No applicable resolution strategy produced a result for the symbol.
    /// This is a terminal error - retrying won't help.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The credential for the provider is not configured.
    /// A deployment problem, not an upstream one.
    #[error("Missing API key for provider: {provider}")]
    MissingApiKey {
        /// The provider whose credential is absent
        provider: String,
    },

    /// The operation is not implemented by this provider.
    #[error("Operation not supported: {operation} ({provider})")]
    NotSupported {
        /// The operation that was requested
        operation: String,
        /// The provider that does not support it
        provider: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns the boundary classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use horizon_market_data::errors::{ErrorClass, MarketDataError};
    ///
    /// let error = MarketDataError::RateLimited { provider: "FMP".to_string() };
    /// assert_eq!(error.class(), ErrorClass::Throttled);
    ///
    /// let error = MarketDataError::SymbolNotFound("INVALID".to_string());
    /// assert_eq!(error.class(), ErrorClass::NotFound);
    /// ```
    pub fn class(&self) -> ErrorClass {
        match self {
            // Rejected before any provider call
            Self::InvalidQuery(_) => ErrorClass::BadRequest,

            // The provider (or the premium gate) refused the symbol
            Self::AccessDenied { .. } => ErrorClass::Denied,

            // Exhausted every applicable strategy
            Self::SymbolNotFound(_) => ErrorClass::NotFound,

            Self::RateLimited { .. } => ErrorClass::Throttled,

            // Deployment problem, distinct from upstream failures
            Self::MissingApiKey { .. } => ErrorClass::Configuration,

            // Anything the upstream did wrong
            Self::Timeout { .. }
            | Self::ProviderError { .. }
            | Self::NotSupported { .. }
            | Self::Network(_) => ErrorClass::Upstream,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_query_is_bad_request() {
        let error = MarketDataError::InvalidQuery("empty query".to_string());
        assert_eq!(error.class(), ErrorClass::BadRequest);
    }

    #[test]
    fn test_access_denied_is_denied() {
        let error = MarketDataError::AccessDenied {
            symbol: "^GSPC".to_string(),
        };
        assert_eq!(error.class(), ErrorClass::Denied);
    }

    #[test]
    fn test_symbol_not_found_is_not_found() {
        let error = MarketDataError::SymbolNotFound("INVALID".to_string());
        assert_eq!(error.class(), ErrorClass::NotFound);
    }

    #[test]
    fn test_rate_limited_is_throttled() {
        let error = MarketDataError::RateLimited {
            provider: "FMP".to_string(),
        };
        assert_eq!(error.class(), ErrorClass::Throttled);
    }

    #[test]
    fn test_timeout_is_upstream() {
        let error = MarketDataError::Timeout {
            provider: "YAHOO".to_string(),
        };
        assert_eq!(error.class(), ErrorClass::Upstream);
    }

    #[test]
    fn test_provider_error_is_upstream() {
        let error = MarketDataError::ProviderError {
            provider: "FMP".to_string(),
            message: "Internal server error".to_string(),
        };
        assert_eq!(error.class(), ErrorClass::Upstream);
    }

    #[test]
    fn test_missing_api_key_is_configuration() {
        let error = MarketDataError::MissingApiKey {
            provider: "FMP".to_string(),
        };
        assert_eq!(error.class(), ErrorClass::Configuration);
    }

    #[test]
    fn test_not_supported_is_upstream() {
        let error = MarketDataError::NotSupported {
            operation: "profile".to_string(),
            provider: "YAHOO".to_string(),
        };
        assert_eq!(error.class(), ErrorClass::Upstream);
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::SymbolNotFound("INVALID".to_string());
        assert_eq!(format!("{}", error), "Symbol not found: INVALID");

        let error = MarketDataError::AccessDenied {
            symbol: "^DJI".to_string(),
        };
        assert_eq!(format!("{}", error), "Access denied for symbol: ^DJI");

        let error = MarketDataError::ProviderError {
            provider: "FMP".to_string(),
            message: "API key invalid".to_string(),
        };
        assert_eq!(format!("{}", error), "Provider error: FMP - API key invalid");
    }
}

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{FundamentalsProfile, InstrumentQuote, SearchResult};

/// Common interface for market data providers.
///
/// Lookup methods return `Ok(None)` when the provider answered but carried
/// no data for the symbol; `Err` is reserved for transport and access
/// problems. Providers that do not support an operation return
/// [`MarketDataError::NotSupported`] from the default implementations.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Short identifier used in logs and error messages.
    fn id(&self) -> &'static str;

    /// Search for instruments matching a free-form query.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, MarketDataError> {
        let _ = query;
        Err(MarketDataError::NotSupported {
            operation: "search".to_string(),
            provider: self.id().to_string(),
        })
    }

    /// Fetch the fundamentals profile for a symbol.
    async fn get_profile(
        &self,
        symbol: &str,
    ) -> Result<Option<FundamentalsProfile>, MarketDataError> {
        let _ = symbol;
        Err(MarketDataError::NotSupported {
            operation: "get_profile".to_string(),
            provider: self.id().to_string(),
        })
    }

    /// Fetch the latest quote for a symbol.
    async fn get_quote(&self, symbol: &str) -> Result<Option<InstrumentQuote>, MarketDataError> {
        let _ = symbol;
        Err(MarketDataError::NotSupported {
            operation: "get_quote".to_string(),
            provider: self.id().to_string(),
        })
    }
}

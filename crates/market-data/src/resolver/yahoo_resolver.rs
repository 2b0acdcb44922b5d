//! Standalone resolver backed by the Yahoo chart endpoint.

use std::sync::Arc;

use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::AssetProfile;
use crate::normalize;
use crate::provider::YahooProvider;

/// Resolve profiles through Yahoo Finance chart metadata.
///
/// This sits outside the [`InstrumentResolver`] chain: it is the backend of
/// its own lookup endpoint and covers symbols the primary provider cannot,
/// at the cost of much thinner data (no fundamentals, synthesized
/// description fields). The premium index gate does not apply here.
///
/// [`InstrumentResolver`]: crate::resolver::InstrumentResolver
pub struct YahooResolver {
    provider: Arc<YahooProvider>,
}

impl YahooResolver {
    pub fn new(provider: Arc<YahooProvider>) -> Self {
        Self { provider }
    }

    /// Resolve a symbol through the chart endpoint.
    pub async fn resolve(&self, symbol: &str) -> Result<AssetProfile, MarketDataError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(MarketDataError::InvalidQuery(
                "symbol must not be empty".to_string(),
            ));
        }
        let symbol = symbol.to_uppercase();

        let Some(meta) = self.provider.get_chart(&symbol).await? else {
            return Err(MarketDataError::SymbolNotFound(symbol));
        };

        debug!("Resolved {} via yahoo chart", symbol);
        Ok(normalize::from_chart_meta(&meta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_symbol_rejected_without_calls() {
        let resolver = YahooResolver::new(Arc::new(YahooProvider::new()));
        let err = resolver.resolve("  ").await.unwrap_err();
        assert!(matches!(err, MarketDataError::InvalidQuery(_)));
    }
}

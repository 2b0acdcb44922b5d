//! Quote-only resolution strategy for crypto pairs.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::normalize;
use crate::provider::MarketDataProvider;
use crate::resolver::traits::{Resolution, ResolveStrategy};

/// Resolve through the bare quote endpoint.
///
/// Crypto pairs have no fundamentals profile on the primary provider, but
/// they do quote. A hit here synthesizes a profile around the quote; a miss
/// means the symbol is unknown to the provider altogether.
pub struct CryptoQuoteStrategy {
    provider: Arc<dyn MarketDataProvider>,
}

impl CryptoQuoteStrategy {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl ResolveStrategy for CryptoQuoteStrategy {
    fn name(&self) -> &'static str {
        "crypto_quote"
    }

    async fn resolve(&self, symbol: &str) -> Result<Resolution, MarketDataError> {
        let Some(quote) = self.provider.get_quote(symbol).await? else {
            return Ok(Resolution::NotFound);
        };

        Ok(Resolution::Found(normalize::from_crypto_quote(
            symbol, &quote,
        )))
    }
}

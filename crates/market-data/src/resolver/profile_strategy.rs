//! Fundamentals-first resolution strategy.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::errors::MarketDataError;
use crate::normalize;
use crate::provider::MarketDataProvider;
use crate::resolver::traits::{Resolution, ResolveStrategy};

/// Resolve through the provider's fundamentals profile.
///
/// When a profile exists, the quote endpoint is asked once more for a
/// fresher price. Quote failures are non-fatal; the snapshot price inside
/// the profile stands in.
pub struct ProfileStrategy {
    provider: Arc<dyn MarketDataProvider>,
}

impl ProfileStrategy {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl ResolveStrategy for ProfileStrategy {
    fn name(&self) -> &'static str {
        "fundamentals"
    }

    async fn resolve(&self, symbol: &str) -> Result<Resolution, MarketDataError> {
        let Some(profile) = self.provider.get_profile(symbol).await? else {
            return Ok(Resolution::NotFound);
        };

        let fresh_price = match self.provider.get_quote(symbol).await {
            Ok(quote) => quote.and_then(|q| q.price),
            Err(e) => {
                warn!("Quote refresh for {} failed: {}", symbol, e);
                None
            }
        };

        Ok(Resolution::Found(normalize::from_fundamentals(
            &profile,
            fresh_price,
        )))
    }
}

//! Resolution chain - tries resolution strategies in order.
//!
//! This is the main entry point for profile resolution against the primary
//! provider. It canonicalizes the requested symbol, applies the premium
//! index gate, and then walks the strategies until one finds a profile.

use std::sync::Arc;

use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::AssetProfile;
use crate::provider::MarketDataProvider;
use crate::resolver::crypto_strategy::CryptoQuoteStrategy;
use crate::resolver::profile_strategy::ProfileStrategy;
use crate::resolver::traits::{Resolution, ResolveStrategy};

/// Index symbols FMP only serves on paid plans.
///
/// Requests for these are refused up front; they would burn an upstream
/// call just to come back with HTTP 403.
pub const PREMIUM_INDEX_SYMBOLS: [&str; 5] = ["^GSPC", "^DJI", "^IXIC", "^RUT", "^VIX"];

/// Composite resolver that tries multiple strategies in order.
///
/// The resolution order is:
/// 1. Fundamentals profile plus quote refresh
/// 2. Bare quote (crypto pairs)
///
/// The chain stops at the first strategy that finds a profile. A strategy
/// answering `NotFound` hands over to the next one; a strategy failing
/// stops the chain and the failure is reported as-is. When every strategy
/// comes up empty the symbol does not exist anywhere we can see.
pub struct InstrumentResolver {
    strategies: Vec<Box<dyn ResolveStrategy>>,
}

impl InstrumentResolver {
    /// Create a resolver with the default strategy order.
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            strategies: vec![
                Box::new(ProfileStrategy::new(provider.clone())),
                Box::new(CryptoQuoteStrategy::new(provider)),
            ],
        }
    }

    /// Create a resolver with a custom strategy list.
    pub fn with_strategies(strategies: Vec<Box<dyn ResolveStrategy>>) -> Self {
        Self { strategies }
    }

    /// Resolve a symbol into a complete asset profile.
    ///
    /// The input is trimmed and uppercased before anything else; every
    /// strategy sees the canonical spelling.
    pub async fn resolve(&self, symbol: &str) -> Result<AssetProfile, MarketDataError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(MarketDataError::InvalidQuery(
                "symbol must not be empty".to_string(),
            ));
        }
        let symbol = symbol.to_uppercase();

        if is_premium_index(&symbol) {
            return Err(MarketDataError::AccessDenied { symbol });
        }

        for strategy in &self.strategies {
            match strategy.resolve(&symbol).await? {
                Resolution::Found(profile) => {
                    debug!("Resolved {} via {} strategy", symbol, strategy.name());
                    return Ok(profile);
                }
                Resolution::NotFound => {
                    debug!("{} strategy has no data for {}", strategy.name(), symbol);
                }
            }
        }

        Err(MarketDataError::SymbolNotFound(symbol))
    }
}

/// Whether a symbol is on the premium index denylist.
pub fn is_premium_index(symbol: &str) -> bool {
    PREMIUM_INDEX_SYMBOLS.contains(&symbol)
}

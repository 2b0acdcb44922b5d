//! Resolution traits for the market data crate.
//!
//! Defines the abstractions for turning a requested symbol into a complete
//! asset profile by trying data sources in a fixed order.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::AssetProfile;

/// Outcome of a single resolution strategy.
#[derive(Clone, Debug)]
pub enum Resolution {
    /// The strategy produced a complete profile.
    Found(AssetProfile),
    /// The strategy answered cleanly but has no data for this symbol.
    NotFound,
}

/// Individual strategy in the resolution chain.
///
/// Strategies are tried in order until one finds a profile.
///
/// # Returns
/// * `Ok(Resolution::Found(profile))` - profile found (stops the chain)
/// * `Ok(Resolution::NotFound)` - no data here (the chain tries the next strategy)
/// * `Err(error)` - transport or access failure (stops the chain)
#[async_trait]
pub trait ResolveStrategy: Send + Sync {
    /// Strategy name used in logs.
    fn name(&self) -> &'static str;

    /// Attempt to resolve `symbol` into a profile.
    ///
    /// `symbol` arrives already trimmed and uppercased.
    async fn resolve(&self, symbol: &str) -> Result<Resolution, MarketDataError>;
}

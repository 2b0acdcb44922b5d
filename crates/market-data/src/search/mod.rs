//! Symbol search over a provider backend.
//!
//! Both search endpoints (primary and Yahoo) run through the same
//! aggregator; only the provider behind it differs. The aggregator owns the
//! guarantees the providers do not: a validated query, a hard cap on the
//! result count, and a non-empty asset type on every row.

use std::sync::Arc;

use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{SearchResult, DEFAULT_ASSET_TYPE, SEARCH_RESULT_LIMIT};
use crate::provider::MarketDataProvider;

/// Provider-backed symbol search with uniform output guarantees.
pub struct SymbolSearchAggregator {
    provider: Arc<dyn MarketDataProvider>,
}

impl SymbolSearchAggregator {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Search the backend for instruments matching `query`.
    ///
    /// The query is trimmed first and must not end up empty. At most
    /// [`SEARCH_RESULT_LIMIT`] results come back no matter how generous the
    /// backend is, and every result carries an asset type.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, MarketDataError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(MarketDataError::InvalidQuery(
                "query must not be empty".to_string(),
            ));
        }

        let mut results = self.provider.search(query).await?;
        results.truncate(SEARCH_RESULT_LIMIT);
        for result in &mut results {
            if result.asset_type.is_empty() {
                result.asset_type = DEFAULT_ASSET_TYPE.to_string();
            }
        }

        debug!(
            "Search for '{}' produced {} results via {}",
            query,
            results.len(),
            self.provider.id()
        );

        Ok(results)
    }
}

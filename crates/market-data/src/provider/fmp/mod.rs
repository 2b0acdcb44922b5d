//! Financial Modeling Prep market data provider implementation.
//!
//! This module provides market data from the FMP stable v3 API:
//! - Company fundamentals via /profile/{symbol} endpoint
//! - Latest quotes (equities and crypto pairs) via /quote/{symbol} endpoint
//! - Symbol search via /search endpoint
//!
//! All endpoints answer with a JSON array; an empty array means the symbol
//! is unknown to FMP, not an error. Index symbols (^GSPC and friends) are
//! behind the paid tier and come back as HTTP 403.
//! API documentation: https://site.financialmodelingprep.com/developer/docs

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{
    FundamentalsProfile, InstrumentQuote, SearchResult, DEFAULT_ASSET_TYPE, SEARCH_RESULT_LIMIT,
};
use crate::provider::MarketDataProvider;

const BASE_URL: &str = "https://financialmodelingprep.com/api/v3";
const PROVIDER_ID: &str = "FMP";

// ============================================================================
// API Response Structures
// ============================================================================

/// Individual result item from the /search endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct FmpSearchItem {
    /// Symbol for follow-up API calls
    symbol: String,
    /// Full company or pair name
    name: Option<String>,
    /// Exchange code (e.g., "NASDAQ")
    exchange_short_name: Option<String>,
    /// Security type as FMP reports it ("stock", "etf", "crypto", ...)
    #[serde(rename = "type")]
    asset_type: Option<String>,
    // Note: currency and stockExchange fields exist but are not consumed
}

// ============================================================================
// FmpProvider
// ============================================================================

/// Financial Modeling Prep provider.
///
/// Primary source for profiles, quotes and search. The API key is optional
/// at construction so the server can boot without one; every call then
/// fails with [`MarketDataError::MissingApiKey`] instead of reaching the
/// network.
pub struct FmpProvider {
    client: Client,
    api_key: Option<String>,
}

impl FmpProvider {
    /// Create a new FMP provider with the given API key.
    pub fn new(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, api_key }
    }

    /// Make a GET request to the FMP API.
    ///
    /// `symbol` is only used for error context; search calls pass the query
    /// in its place.
    async fn fetch(&self, endpoint: &str, symbol: &str) -> Result<String, MarketDataError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| MarketDataError::MissingApiKey {
                provider: PROVIDER_ID.to_string(),
            })?;

        let url = format!("{}{}", BASE_URL, endpoint);
        let request = self.client.get(&url).query(&[("apikey", api_key)]);

        debug!("FMP request: {} for '{}'", endpoint, symbol);

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("Request failed: {}", e),
                }
            }
        })?;

        let status = response.status();

        // Paid-tier symbols and revoked keys both answer 403
        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(MarketDataError::AccessDenied {
                symbol: symbol.to_string(),
            });
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: "Invalid or missing API key".to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, body),
            });
        }

        response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to read response: {}", e),
            })
    }

    /// Fetch the fundamentals profile from /profile/{symbol}.
    ///
    /// Returns `Ok(None)` when FMP has no profile for the symbol, which is
    /// the normal answer for crypto pairs and typos alike.
    async fn fetch_profile(
        &self,
        symbol: &str,
    ) -> Result<Option<FundamentalsProfile>, MarketDataError> {
        let endpoint = format!("/profile/{}", urlencoding::encode(symbol));
        let text = self.fetch(&endpoint, symbol).await?;

        let profiles: Vec<FundamentalsProfile> =
            serde_json::from_str(&text).map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse profile response: {}", e),
            })?;

        Ok(profiles.into_iter().next())
    }

    /// Fetch the latest quote from /quote/{symbol}.
    async fn fetch_quote(&self, symbol: &str) -> Result<Option<InstrumentQuote>, MarketDataError> {
        let endpoint = format!("/quote/{}", urlencoding::encode(symbol));
        let text = self.fetch(&endpoint, symbol).await?;

        let quotes: Vec<InstrumentQuote> =
            serde_json::from_str(&text).map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse quote response: {}", e),
            })?;

        Ok(quotes.into_iter().next())
    }

    /// Search for symbols via /search.
    async fn search_symbols(&self, query: &str) -> Result<Vec<SearchResult>, MarketDataError> {
        let endpoint = format!(
            "/search?query={}&limit={}",
            urlencoding::encode(query),
            SEARCH_RESULT_LIMIT
        );
        let text = self.fetch(&endpoint, query).await?;

        let items: Vec<FmpSearchItem> =
            serde_json::from_str(&text).map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse search response: {}", e),
            })?;

        let results: Vec<SearchResult> = items.into_iter().map(map_search_item).collect();

        debug!("FMP: found {} search results for '{}'", results.len(), query);

        Ok(results)
    }
}

// ============================================================================
// MarketDataProvider Implementation
// ============================================================================

#[async_trait]
impl MarketDataProvider for FmpProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, MarketDataError> {
        debug!("Searching FMP for '{}'", query);
        self.search_symbols(query).await
    }

    async fn get_profile(
        &self,
        symbol: &str,
    ) -> Result<Option<FundamentalsProfile>, MarketDataError> {
        debug!("Fetching profile for {} from FMP", symbol);
        self.fetch_profile(symbol).await
    }

    async fn get_quote(&self, symbol: &str) -> Result<Option<InstrumentQuote>, MarketDataError> {
        debug!("Fetching quote for {} from FMP", symbol);
        self.fetch_quote(symbol).await
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Map an FMP search item to our search result shape.
fn map_search_item(item: FmpSearchItem) -> SearchResult {
    let asset_type = item
        .asset_type
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_ASSET_TYPE.to_string());

    SearchResult::new(
        item.symbol,
        item.name.unwrap_or_default(),
        item.exchange_short_name.unwrap_or_default(),
        asset_type,
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_id() {
        let provider = FmpProvider::new(Some("test_key".to_string()));
        assert_eq!(provider.id(), "FMP");
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_network() {
        let provider = FmpProvider::new(None);

        let err = provider.get_profile("AAPL").await.unwrap_err();
        assert!(matches!(err, MarketDataError::MissingApiKey { .. }));

        let err = provider.search("apple").await.unwrap_err();
        assert!(matches!(err, MarketDataError::MissingApiKey { .. }));
    }

    #[test]
    fn test_search_item_parsing() {
        let json = r#"[
            {
                "symbol": "AAPL",
                "name": "Apple Inc.",
                "currency": "USD",
                "stockExchange": "NASDAQ Global Select",
                "exchangeShortName": "NASDAQ",
                "type": "stock"
            },
            {
                "symbol": "BTCUSD",
                "name": "Bitcoin USD",
                "currency": "USD",
                "stockExchange": "CCC",
                "exchangeShortName": "CRYPTO",
                "type": "crypto"
            }
        ]"#;

        let items: Vec<FmpSearchItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].symbol, "AAPL");
        assert_eq!(items[0].asset_type.as_deref(), Some("stock"));
        assert_eq!(items[1].exchange_short_name.as_deref(), Some("CRYPTO"));
    }

    #[test]
    fn test_map_search_item_defaults_type() {
        let item = FmpSearchItem {
            symbol: "SAP.DE".to_string(),
            name: Some("SAP SE".to_string()),
            exchange_short_name: Some("XETRA".to_string()),
            asset_type: None,
        };

        let result = map_search_item(item);
        assert_eq!(result.asset_type, "stock");
        assert_eq!(result.exchange_short_name, "XETRA");
    }

    #[test]
    fn test_map_search_item_keeps_provider_type() {
        let item = FmpSearchItem {
            symbol: "VTI".to_string(),
            name: Some("Vanguard Total Stock Market ETF".to_string()),
            exchange_short_name: Some("AMEX".to_string()),
            asset_type: Some("etf".to_string()),
        };

        let result = map_search_item(item);
        assert_eq!(result.asset_type, "etf");
    }
}

//! Yahoo Finance market data provider.
//!
//! This provider talks to the public Yahoo Finance endpoints:
//! - Chart metadata (price, previous close, names) via /v8/finance/chart
//! - Symbol search via /v1/finance/search
//!
//! Both endpoints are unauthenticated but reject requests that do not carry
//! a browser User-Agent header.

mod models;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::debug;
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::{SearchResult, DEFAULT_ASSET_TYPE, SEARCH_RESULT_LIMIT};
use crate::provider::MarketDataProvider;

pub use models::ChartMeta;
use models::{ChartResponse, SearchQuote, SearchResponse};

const BASE_URL: &str = "https://query1.finance.yahoo.com";
const PROVIDER_ID: &str = "YAHOO";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

// ============================================================================
// YahooProvider
// ============================================================================

/// Yahoo Finance provider.
///
/// Backup source used when FMP cannot answer: chart metadata stands in for
/// a fundamentals profile and the search endpoint covers exchanges FMP's
/// free tier does not.
pub struct YahooProvider {
    client: Client,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Make a GET request to a Yahoo Finance endpoint.
    ///
    /// Returns `Ok(None)` for HTTP 404; the chart endpoint uses that status
    /// for unknown symbols and it is not a failure.
    async fn fetch(&self, endpoint: &str) -> Result<Option<String>, MarketDataError> {
        let url = format!("{}{}", BASE_URL, endpoint);

        debug!("Yahoo request: {}", endpoint);

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| {
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

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, body),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to read response: {}", e),
            })?;

        Ok(Some(text))
    }

    /// Fetch chart metadata from /v8/finance/chart/{symbol}.
    ///
    /// Returns `Ok(None)` when Yahoo does not know the symbol. Yahoo reports
    /// that either as a null result array or as a plain HTTP 404 depending
    /// on the symbol shape, so both collapse to `None` here.
    pub async fn get_chart(&self, symbol: &str) -> Result<Option<ChartMeta>, MarketDataError> {
        let endpoint = format!("/v8/finance/chart/{}", encode(symbol));
        let Some(text) = self.fetch(&endpoint).await? else {
            return Ok(None);
        };

        let response: ChartResponse =
            serde_json::from_str(&text).map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse chart response: {}", e),
            })?;

        Ok(response
            .chart
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(|result| result.meta))
    }

    /// Search for symbols via /v1/finance/search.
    async fn search_symbols(&self, query: &str) -> Result<Vec<SearchResult>, MarketDataError> {
        let endpoint = format!("/v1/finance/search?q={}", encode(query));
        let Some(text) = self.fetch(&endpoint).await? else {
            return Ok(Vec::new());
        };

        let response: SearchResponse =
            serde_json::from_str(&text).map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse search response: {}", e),
            })?;

        let results: Vec<SearchResult> = response
            .quotes
            .into_iter()
            .take(SEARCH_RESULT_LIMIT)
            .map(map_search_quote)
            .collect();

        debug!("Yahoo: found {} search results for '{}'", results.len(), query);

        Ok(results)
    }
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// MarketDataProvider Implementation
// ============================================================================

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, MarketDataError> {
        debug!("Searching Yahoo for '{}'", query);
        self.search_symbols(query).await
    }

    // get_profile and get_quote stay NotSupported; profile lookups against
    // Yahoo go through get_chart instead.
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Map a Yahoo search hit to our search result shape.
fn map_search_quote(quote: SearchQuote) -> SearchResult {
    let SearchQuote {
        symbol,
        longname,
        shortname,
        exchange,
        quote_type,
    } = quote;

    let name = non_empty(longname)
        .or_else(|| non_empty(shortname))
        .unwrap_or_else(|| symbol.clone());
    let exchange = non_empty(exchange).unwrap_or_else(|| "Unknown".to_string());
    let asset_type = non_empty(quote_type).unwrap_or_else(|| DEFAULT_ASSET_TYPE.to_string());

    SearchResult::new(symbol, name, exchange, asset_type)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

// ============================================================================
// Tests
// ============================================================================

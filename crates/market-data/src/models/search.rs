//! Search result models for symbol lookup.

use serde::{Deserialize, Serialize};

/// Asset type used when a provider omits its own.
pub const DEFAULT_ASSET_TYPE: &str = "stock";

/// Maximum number of results a search returns, regardless of backend.
pub const SEARCH_RESULT_LIMIT: usize = 10;

/// Result from a ticker/symbol search.
///
/// This is the shape the search dropdown consumes; both search backends
/// normalize into it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Symbol/ticker (e.g., "AAPL", "BTCUSD")
    pub symbol: String,

    /// Display name (e.g., "Apple Inc.")
    pub name: String,

    /// Exchange code (e.g., "NASDAQ"). The Yahoo backend fills "Unknown"
    /// when its payload omits this; the primary backend reports it as-is.
    pub exchange_short_name: String,

    /// Asset type as the provider reports it. Defaults to
    /// [`DEFAULT_ASSET_TYPE`] only when absent upstream; a provider-supplied
    /// value is never overwritten.
    #[serde(rename = "type")]
    pub asset_type: String,
}

impl SearchResult {
    /// Create a new search result with all fields.
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        exchange_short_name: impl Into<String>,
        asset_type: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            exchange_short_name: exchange_short_name.into(),
            asset_type: asset_type.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_serialization() {
        let result = SearchResult::new("AAPL", "Apple Inc.", "NASDAQ", "stock");
        let json = serde_json::to_string(&result).unwrap();

        assert!(json.contains("\"exchangeShortName\":\"NASDAQ\""));
        assert!(json.contains("\"type\":\"stock\""));
    }

    #[test]
    fn test_search_result_deserialization() {
        let json = r#"{
            "symbol": "SHOP",
            "name": "Shopify Inc.",
            "exchangeShortName": "NYSE",
            "type": "stock"
        }"#;

        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.symbol, "SHOP");
        assert_eq!(result.asset_type, "stock");
    }
}

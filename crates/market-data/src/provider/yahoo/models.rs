//! Yahoo Finance API response models.
//!
//! These models parse the public v8 chart and v1 search responses. Only the
//! metadata block of a chart is consumed; the OHLC time series next to it
//! is not requested for anything we do.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Main response wrapper for the v8 chart API
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: ChartEnvelope,
}

/// Chart container
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChartEnvelope {
    pub result: Option<Vec<ChartResult>>,
    // Note: error field exists in API but misses surface as a null result
}

/// Individual chart result
#[derive(Debug, Deserialize)]
pub struct ChartResult {
    pub meta: ChartMeta,
}

/// Metadata block of a chart result
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartMeta {
    /// Canonical symbol spelling as Yahoo reports it
    pub symbol: String,
    /// Trade currency (e.g., "USD")
    pub currency: Option<String>,
    /// Short exchange code (e.g., "NMS")
    pub exchange_name: Option<String>,
    /// Human readable exchange name (e.g., "NasdaqGS")
    pub full_exchange_name: Option<String>,
    /// Full instrument name
    pub long_name: Option<String>,
    /// Abbreviated instrument name
    pub short_name: Option<String>,
    /// IANA timezone of the listing exchange
    pub exchange_timezone_name: Option<String>,
    /// Latest traded price
    pub regular_market_price: Option<Decimal>,
    /// Previous session close
    pub previous_close: Option<Decimal>,
    /// Market capitalization, rarely present on this endpoint
    pub market_cap: Option<Decimal>,
    // Note: chartPreviousClose, regularMarketDayHigh/Low, regularMarketVolume,
    // instrumentType and the granularity fields exist but are not consumed
}

/// Main response wrapper for the v1 search API
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub quotes: Vec<SearchQuote>,
    // Note: news, count and nav fields exist but are not consumed
}

/// Individual hit from the search API.
///
/// Yahoo spells the name fields in all-lowercase on this endpoint, unlike
/// the rest of its APIs, so there is no blanket rename here.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchQuote {
    pub symbol: String,
    pub longname: Option<String>,
    pub shortname: Option<String>,
    pub exchange: Option<String>,
    #[serde(rename = "quoteType")]
    pub quote_type: Option<String>,
    // Note: index, score, typeDisp and isYahooFinance exist but are not consumed
}

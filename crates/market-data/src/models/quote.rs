//! Raw quote payload from the primary provider.

use rust_decimal::Decimal;
use serde::Deserialize;

/// One element of the primary provider's `/quote/{symbol}` response.
///
/// Served for equities and crypto pairs alike. The crypto fallback path
/// synthesizes a complete canonical profile out of nothing but this.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstrumentQuote {
    /// Ticker as the provider spells it
    pub symbol: String,

    /// Instrument display name
    pub name: Option<String>,

    /// Latest traded price
    pub price: Option<Decimal>,

    /// Absolute day change
    pub change: Option<Decimal>,

    /// Day change in percent
    pub changes_percentage: Option<Decimal>,

    /// Exchange code
    pub exchange: Option<String>,

    /// Market capitalization
    pub market_cap: Option<Decimal>,
    // Note: dayLow/dayHigh, yearLow/yearHigh, previousClose, open, volume,
    // avgVolume, eps, pe and sharesOutstanding exist upstream but are not
    // consumed.
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_payload_parsing() {
        let json = r#"{
            "symbol": "BTCUSD",
            "name": "Bitcoin USD",
            "price": 43250.93,
            "changesPercentage": 2.0541,
            "change": 870.93,
            "dayLow": 42102.5,
            "dayHigh": 43500.0,
            "marketCap": 846758000000,
            "exchange": "CRYPTO",
            "volume": 24582291456,
            "previousClose": 42380.0
        }"#;

        // Note: JSON includes extra fields (dayLow, dayHigh, volume, previousClose) that we don't parse
        let quote: InstrumentQuote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.symbol, "BTCUSD");
        assert_eq!(quote.name.as_deref(), Some("Bitcoin USD"));
        assert_eq!(quote.price, Some(dec!(43250.93)));
        assert_eq!(quote.change, Some(dec!(870.93)));
        assert_eq!(quote.changes_percentage, Some(dec!(2.0541)));
        assert_eq!(quote.exchange.as_deref(), Some("CRYPTO"));
        assert_eq!(quote.market_cap, Some(dec!(846758000000)));
    }

    #[test]
    fn test_quote_payload_with_null_price() {
        let json = r#"{"symbol": "HALTED", "price": null}"#;

        let quote: InstrumentQuote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.symbol, "HALTED");
        assert_eq!(quote.price, None);
    }
}

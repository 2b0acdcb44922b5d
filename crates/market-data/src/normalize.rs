//! Payload normalization into the canonical profile shape.
//!
//! Each resolution path ends here: a provider payload goes in, a complete
//! [`AssetProfile`] comes out. These functions are pure and never fail;
//! missing data degrades to the documented defaults instead of aborting a
//! resolution the provider already answered.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::models::{AssetProfile, FundamentalsProfile, InstrumentQuote};
use crate::provider::yahoo::ChartMeta;

/// Build the canonical profile from a fundamentals payload.
///
/// `fresh_price` is the quote endpoint's price for the same symbol, which
/// wins over the snapshot embedded in the profile when present.
pub fn from_fundamentals(profile: &FundamentalsProfile, fresh_price: Option<Decimal>) -> AssetProfile {
    let mut canonical = AssetProfile::new(&profile.symbol);

    if let Some(name) = non_empty(profile.company_name.as_deref()) {
        canonical.company_name = name.to_string();
    }
    canonical.price = clamp_price(fresh_price.or(profile.price));
    canonical.changes = profile.changes.unwrap_or(Decimal::ZERO);
    canonical.changes_percentage = profile.changes_percentage.unwrap_or(Decimal::ZERO);
    if let Some(exchange) = non_empty(profile.exchange.as_deref()) {
        canonical.exchange = exchange.to_string();
    }
    if let Some(code) = non_empty(profile.exchange_short_name.as_deref()) {
        canonical.exchange_short_name = code.to_string();
    }
    canonical.industry = profile.industry.clone().unwrap_or_default();
    canonical.sector = profile.sector.clone().unwrap_or_default();
    if let Some(currency) = non_empty(profile.currency.as_deref()) {
        canonical.currency = currency.to_string();
    }
    canonical.image = profile.image.clone().unwrap_or_default();
    canonical.description = profile.description.clone().unwrap_or_default();
    canonical.website = profile.website.clone().unwrap_or_default();
    canonical.ceo = profile.ceo.clone().unwrap_or_default();
    canonical.country = profile.country.clone().unwrap_or_default();
    canonical.ipo_date = profile.ipo_date.clone().unwrap_or_default();
    canonical.market_cap = profile.market_cap.unwrap_or(Decimal::ZERO);
    canonical.full_time_employees = profile
        .full_time_employees
        .as_deref()
        .and_then(|count| count.trim().parse().ok())
        .unwrap_or(0);
    canonical.last_updated = Utc::now();

    canonical
}

/// Build a minimal canonical profile from a bare quote.
///
/// This is the crypto fallback: the primary provider has no fundamentals
/// profile for crypto pairs, so the profile is synthesized from the quote.
/// `requested` is the symbol the caller asked for; it drives the fabricated
/// image and description, while the symbol field echoes the quote's own
/// spelling.
pub fn from_crypto_quote(requested: &str, quote: &InstrumentQuote) -> AssetProfile {
    let mut canonical = AssetProfile::new(&quote.symbol);

    canonical.company_name = quote
        .name
        .clone()
        .unwrap_or_else(|| requested.to_string());
    canonical.price = clamp_price(quote.price);
    canonical.changes = quote.change.unwrap_or(Decimal::ZERO);
    canonical.changes_percentage = quote.changes_percentage.unwrap_or(Decimal::ZERO);
    let exchange = quote.exchange.clone().unwrap_or_else(|| "CRYPTO".to_string());
    canonical.exchange_short_name = exchange.clone();
    canonical.exchange = exchange;
    canonical.industry = "Cryptocurrency".to_string();
    canonical.sector = "Digital Assets".to_string();
    canonical.image = format!(
        "https://financialmodelingprep.com/image-stock/{}.png",
        requested
    );
    canonical.description = format!("{} cryptocurrency trading pair", requested);
    canonical.market_cap = quote.market_cap.unwrap_or(Decimal::ZERO);
    canonical.last_updated = Utc::now();

    canonical
}

/// Build the canonical profile from a Yahoo chart metadata block.
///
/// The chart endpoint carries no fundamentals, so price movement is derived
/// from `(regularMarketPrice, previousClose)` and the descriptive fields are
/// synthesized. Industry and sector stay empty; the chart says nothing about
/// them and a classification is never invented for equities.
pub fn from_chart_meta(meta: &ChartMeta) -> AssetProfile {
    let mut canonical = AssetProfile::new(&meta.symbol);

    let change = match (meta.regular_market_price, meta.previous_close) {
        (Some(latest), Some(previous)) => latest - previous,
        _ => Decimal::ZERO,
    };

    canonical.company_name = meta
        .long_name
        .clone()
        .or_else(|| meta.short_name.clone())
        .unwrap_or_else(|| meta.symbol.clone());
    canonical.price = clamp_price(meta.regular_market_price.or(meta.previous_close));
    canonical.changes = change;
    canonical.changes_percentage =
        percent_change(change, meta.previous_close.unwrap_or(Decimal::ZERO));
    canonical.exchange = meta
        .full_exchange_name
        .clone()
        .or_else(|| meta.exchange_name.clone())
        .unwrap_or_else(|| "Unknown".to_string());
    canonical.exchange_short_name = meta
        .exchange_name
        .clone()
        .unwrap_or_else(|| "Unknown".to_string());
    if let Some(currency) = non_empty(meta.currency.as_deref()) {
        canonical.currency = currency.to_string();
    }
    canonical.image = format!("https://logo.clearbit.com/{}.com", meta.symbol.to_lowercase());
    canonical.description = format!(
        "{} traded on {}",
        meta.long_name.as_deref().unwrap_or(&meta.symbol),
        meta.exchange_name.as_deref().unwrap_or("stock exchange")
    );
    canonical.website = format!("https://finance.yahoo.com/quote/{}", meta.symbol);
    canonical.ceo = "N/A".to_string();
    canonical.country = match &meta.exchange_timezone_name {
        Some(timezone) if timezone.contains("America") => "US".to_string(),
        _ => "Unknown".to_string(),
    };
    canonical.ipo_date = "N/A".to_string();
    canonical.market_cap = meta.market_cap.unwrap_or(Decimal::ZERO);
    canonical.last_updated = Utc::now();

    canonical
}

/// Day change in percent relative to the previous close.
///
/// Returns 0 when `previous_close` is not strictly positive, so a missing
/// or zero close never turns into a division error.
pub fn percent_change(change: Decimal, previous_close: Decimal) -> Decimal {
    if previous_close > Decimal::ZERO {
        (change / previous_close) * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

fn clamp_price(price: Option<Decimal>) -> Decimal {
    price.unwrap_or(Decimal::ZERO).max(Decimal::ZERO)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn fundamentals_fixture() -> FundamentalsProfile {
        FundamentalsProfile {
            symbol: "AAPL".to_string(),
            company_name: Some("Apple Inc.".to_string()),
            price: Some(dec!(178.72)),
            changes: Some(dec!(-0.13)),
            changes_percentage: None,
            currency: Some("USD".to_string()),
            exchange: Some("NASDAQ Global Select".to_string()),
            exchange_short_name: Some("NASDAQ".to_string()),
            industry: Some("Consumer Electronics".to_string()),
            sector: Some("Technology".to_string()),
            image: Some("https://financialmodelingprep.com/image-stock/AAPL.png".to_string()),
            description: Some("Designs smartphones.".to_string()),
            website: Some("https://www.apple.com".to_string()),
            ceo: Some("Mr. Timothy D. Cook".to_string()),
            country: Some("US".to_string()),
            ipo_date: Some("1980-12-12".to_string()),
            market_cap: Some(dec!(2794340000000)),
            full_time_employees: Some("164000".to_string()),
        }
    }

    #[test]
    fn test_fundamentals_full_mapping() {
        let profile = from_fundamentals(&fundamentals_fixture(), None);

        assert_eq!(profile.symbol, "AAPL");
        assert_eq!(profile.company_name, "Apple Inc.");
        assert_eq!(profile.price, dec!(178.72));
        assert_eq!(profile.changes, dec!(-0.13));
        assert_eq!(profile.changes_percentage, Decimal::ZERO);
        assert_eq!(profile.exchange, "NASDAQ Global Select");
        assert_eq!(profile.exchange_short_name, "NASDAQ");
        assert_eq!(profile.industry, "Consumer Electronics");
        assert_eq!(profile.sector, "Technology");
        assert_eq!(profile.market_cap, dec!(2794340000000));
        assert_eq!(profile.full_time_employees, 164000);
        assert_eq!(profile.ipo_date, "1980-12-12");
    }

    #[test]
    fn test_fresh_price_overrides_profile_snapshot() {
        let profile = from_fundamentals(&fundamentals_fixture(), Some(dec!(180.01)));
        assert_eq!(profile.price, dec!(180.01));
    }

    #[test]
    fn test_profile_snapshot_kept_without_fresh_price() {
        let profile = from_fundamentals(&fundamentals_fixture(), None);
        assert_eq!(profile.price, dec!(178.72));
    }

    #[test]
    fn test_sparse_fundamentals_degrade_to_defaults() {
        let sparse = FundamentalsProfile {
            symbol: "OBSCURE".to_string(),
            ..Default::default()
        };

        let profile = from_fundamentals(&sparse, None);
        assert_eq!(profile.company_name, "OBSCURE");
        assert_eq!(profile.price, Decimal::ZERO);
        assert_eq!(profile.exchange, "Unknown");
        assert_eq!(profile.exchange_short_name, "Unknown");
        assert_eq!(profile.industry, "");
        assert_eq!(profile.currency, "USD");
        assert_eq!(profile.image, "");
        assert_eq!(profile.full_time_employees, 0);
    }

    #[test]
    fn test_crypto_quote_synthesis() {
        let quote = InstrumentQuote {
            symbol: "BTCUSD".to_string(),
            name: Some("Bitcoin USD".to_string()),
            price: Some(dec!(43250.93)),
            change: Some(dec!(870.93)),
            changes_percentage: Some(dec!(2.0541)),
            exchange: Some("CRYPTO".to_string()),
            market_cap: Some(dec!(846758000000)),
        };

        let profile = from_crypto_quote("BTCUSD", &quote);
        assert_eq!(profile.symbol, "BTCUSD");
        assert_eq!(profile.company_name, "Bitcoin USD");
        assert_eq!(profile.price, dec!(43250.93));
        assert_eq!(profile.industry, "Cryptocurrency");
        assert_eq!(profile.sector, "Digital Assets");
        assert_eq!(profile.exchange, "CRYPTO");
        assert_eq!(profile.exchange_short_name, "CRYPTO");
        assert_eq!(profile.currency, "USD");
        assert_eq!(
            profile.image,
            "https://financialmodelingprep.com/image-stock/BTCUSD.png"
        );
        assert_eq!(profile.description, "BTCUSD cryptocurrency trading pair");
        assert_eq!(profile.website, "");
        assert_eq!(profile.market_cap, dec!(846758000000));
    }

    #[test]
    fn test_crypto_quote_without_name_falls_back_to_requested_symbol() {
        let quote = InstrumentQuote {
            symbol: "SOLUSD".to_string(),
            ..Default::default()
        };

        let profile = from_crypto_quote("SOLUSD", &quote);
        assert_eq!(profile.company_name, "SOLUSD");
        assert_eq!(profile.price, Decimal::ZERO);
        assert_eq!(profile.exchange, "CRYPTO");
    }

    #[test]
    fn test_chart_meta_mapping() {
        let meta = ChartMeta {
            symbol: "AAPL".to_string(),
            currency: Some("USD".to_string()),
            exchange_name: Some("NMS".to_string()),
            full_exchange_name: Some("NasdaqGS".to_string()),
            long_name: Some("Apple Inc.".to_string()),
            short_name: Some("Apple".to_string()),
            exchange_timezone_name: Some("America/New_York".to_string()),
            regular_market_price: Some(dec!(90)),
            previous_close: Some(dec!(100)),
            market_cap: None,
        };

        let profile = from_chart_meta(&meta);
        assert_eq!(profile.symbol, "AAPL");
        assert_eq!(profile.company_name, "Apple Inc.");
        assert_eq!(profile.price, dec!(90));
        assert_eq!(profile.changes, dec!(-10));
        assert_eq!(profile.changes_percentage, dec!(-10));
        assert_eq!(profile.exchange, "NasdaqGS");
        assert_eq!(profile.exchange_short_name, "NMS");
        assert_eq!(profile.country, "US");
        assert_eq!(profile.ceo, "N/A");
        assert_eq!(profile.ipo_date, "N/A");
        assert_eq!(profile.image, "https://logo.clearbit.com/aapl.com");
        assert_eq!(profile.description, "Apple Inc. traded on NMS");
        assert_eq!(profile.website, "https://finance.yahoo.com/quote/AAPL");
        // The chart knows nothing about classification
        assert_eq!(profile.industry, "");
        assert_eq!(profile.sector, "");
    }

    #[test]
    fn test_chart_meta_without_market_price_uses_previous_close() {
        let meta = ChartMeta {
            symbol: "SAN.MC".to_string(),
            previous_close: Some(dec!(4.1)),
            ..Default::default()
        };

        let profile = from_chart_meta(&meta);
        assert_eq!(profile.price, dec!(4.1));
        assert_eq!(profile.changes, Decimal::ZERO);
        assert_eq!(profile.changes_percentage, Decimal::ZERO);
        assert_eq!(profile.company_name, "SAN.MC");
        assert_eq!(profile.country, "Unknown");
        assert_eq!(profile.description, "SAN.MC traded on stock exchange");
    }

    #[test]
    fn test_percent_change_exact_decimal() {
        assert_eq!(percent_change(dec!(-10), dec!(100)), dec!(-10));
        assert_eq!(percent_change(dec!(2.5), dec!(50)), dec!(5));
    }

    #[test]
    fn test_percent_change_zero_previous_close() {
        assert_eq!(percent_change(dec!(5), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(percent_change(dec!(5), dec!(-1)), Decimal::ZERO);
    }

    #[test]
    fn test_price_never_negative() {
        let sparse = FundamentalsProfile {
            symbol: "BAD".to_string(),
            price: Some(dec!(-3)),
            ..Default::default()
        };

        let profile = from_fundamentals(&sparse, None);
        assert_eq!(profile.price, Decimal::ZERO);
    }
}

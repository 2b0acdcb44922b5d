//! Canonical asset profile models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Normalized instrument profile.
///
/// Every resolution path (equity profile, crypto fallback, Yahoo chart)
/// fills this same shape completely, so consumers never deal with provider
/// payloads. Records are built per request and never cached or mutated
/// after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetProfile {
    /// Exchange ticker, uppercase. Dedup key within a portfolio.
    pub symbol: String,

    /// Display name; falls back to the symbol when the provider has none.
    pub company_name: String,

    /// Latest known price, never negative. The quote endpoint wins over
    /// the profile snapshot when both answer.
    pub price: Decimal,

    /// Absolute day change, 0 when unavailable.
    pub changes: Decimal,

    /// Day change in percent, 0 when unavailable.
    pub changes_percentage: Decimal,

    /// Exchange display name, "Unknown" when the provider omits it.
    pub exchange: String,

    /// Exchange code, "Unknown" when the provider omits it.
    pub exchange_short_name: String,

    /// "Cryptocurrency" on the crypto fallback path, otherwise whatever the
    /// provider reported. Never inferred for equities.
    pub industry: String,

    /// "Digital Assets" on the crypto fallback path, see `industry`.
    pub sector: String,

    /// ISO-like currency code, defaults to "USD".
    pub currency: String,

    /// Logo URL, best effort.
    pub image: String,

    /// Business description, best effort.
    pub description: String,

    /// Company website URL, best effort.
    pub website: String,

    /// Chief executive, best effort.
    pub ceo: String,

    /// Country of domicile, best effort.
    pub country: String,

    /// IPO date as the provider reports it, best effort.
    pub ipo_date: String,

    /// Market capitalization, 0 when unknown.
    pub market_cap: Decimal,

    /// Headcount, 0 when unknown.
    pub full_time_employees: u64,

    /// When this resolution happened, not the age of the upstream data.
    pub last_updated: DateTime<Utc>,
}

impl AssetProfile {
    /// Create a profile for `symbol` with every field at its documented
    /// default. Normalization starts here and overrides what the provider
    /// actually supplied.
    pub fn new(symbol: impl Into<String>) -> Self {
        let symbol = symbol.into();
        Self {
            company_name: symbol.clone(),
            symbol,
            price: Decimal::ZERO,
            changes: Decimal::ZERO,
            changes_percentage: Decimal::ZERO,
            exchange: "Unknown".to_string(),
            exchange_short_name: "Unknown".to_string(),
            industry: String::new(),
            sector: String::new(),
            currency: "USD".to_string(),
            image: String::new(),
            description: String::new(),
            website: String::new(),
            ceo: String::new(),
            country: String::new(),
            ipo_date: String::new(),
            market_cap: Decimal::ZERO,
            full_time_employees: 0,
            last_updated: Utc::now(),
        }
    }
}

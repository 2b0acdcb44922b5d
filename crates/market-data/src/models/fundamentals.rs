//! Raw fundamentals-profile payload from the primary provider.

use rust_decimal::Decimal;
use serde::Deserialize;

/// One element of the primary provider's `/profile/{symbol}` response.
///
/// Field spellings follow the upstream JSON. Everything beyond the symbol
/// is optional because partial payloads do occur, notably on free plans.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FundamentalsProfile {
    /// Ticker as the provider spells it
    pub symbol: String,

    /// Company display name
    pub company_name: Option<String>,

    /// Price snapshot embedded in the profile. Staler than the quote
    /// endpoint, which overrides it during resolution.
    pub price: Option<Decimal>,

    /// Absolute day change
    pub changes: Option<Decimal>,

    /// Day change in percent. Rarely present on this endpoint.
    pub changes_percentage: Option<Decimal>,

    /// Trading currency
    pub currency: Option<String>,

    /// Exchange display name
    pub exchange: Option<String>,

    /// Exchange code
    pub exchange_short_name: Option<String>,

    /// Industry classification
    pub industry: Option<String>,

    /// Sector classification
    pub sector: Option<String>,

    /// Logo URL
    pub image: Option<String>,

    /// Business description
    pub description: Option<String>,

    /// Company website
    pub website: Option<String>,

    /// Chief executive
    pub ceo: Option<String>,

    /// Country of domicile
    pub country: Option<String>,

    /// IPO date, formatted by the provider
    pub ipo_date: Option<String>,

    /// Market capitalization
    #[serde(rename = "mktCap")]
    pub market_cap: Option<Decimal>,

    /// Headcount. The upstream reports this one as a string.
    pub full_time_employees: Option<String>,
    // Note: beta, volAvg, lastDiv, range, cik, isin, cusip, phone, address,
    // dcf, isEtf and isActivelyTrading exist upstream but are not consumed.
}

//! Market data models
//!
//! This module contains the core data types for market data operations:
//! - `profile` - The canonical profile every consumer receives (AssetProfile)
//! - `fundamentals` - Raw fundamentals payload from the primary provider (FundamentalsProfile)
//! - `quote` - Raw quote payload from the primary provider (InstrumentQuote)
//! - `search` - Search result data (SearchResult)

mod fundamentals;
mod profile;
mod quote;
mod search;

pub use fundamentals::FundamentalsProfile;
pub use profile::AssetProfile;
pub use quote::InstrumentQuote;
pub use search::{SearchResult, DEFAULT_ASSET_TYPE, SEARCH_RESULT_LIMIT};

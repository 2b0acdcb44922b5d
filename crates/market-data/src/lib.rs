//! Horizon Market Data Crate
//!
//! This crate provides asset identity resolution and symbol search for the
//! Horizon onboarding backend.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Profile resolution for equities and crypto pairs (FMP)
//! - Backup profile resolution through chart metadata (Yahoo Finance)
//! - Symbol search against either backend
//! - Normalization of every payload into one canonical profile shape
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------------+
//! |   HTTP Layer     | --> |  InstrumentResolver /  |  (chain of strategies,
//! +------------------+     |  YahooResolver         |   premium index gate)
//!                          +------------------------+
//!                                      |
//!                                      v
//!                          +------------------------+
//!                          |       Provider         |  (FMP, Yahoo Finance)
//!                          +------------------------+
//!                                      |
//!                                      v
//!                          +------------------------+
//!                          |      normalize         |  (pure, total)
//!                          +------------------------+
//!                                      |
//!                                      v
//!                          +------------------------+
//!                          |     AssetProfile       |  (canonical shape)
//!                          +------------------------+
//! ```
//!
//! # Core Types
//!
//! - [`AssetProfile`] - The canonical profile every consumer receives
//! - [`FundamentalsProfile`] / [`InstrumentQuote`] - Raw primary provider payloads
//! - [`SearchResult`] - One row of a symbol search
//! - [`MarketDataProvider`] - Interface every provider implements
//! - [`InstrumentResolver`] - Strategy chain behind the main profile endpoint
//! - [`YahooResolver`] - Standalone chart-backed resolver
//! - [`SymbolSearchAggregator`] - Search with cap and asset type guarantees

pub mod errors;
pub mod models;
pub mod normalize;
pub mod provider;
pub mod resolver;
pub mod search;

// Re-export all public types from models
pub use models::{
    AssetProfile, FundamentalsProfile, InstrumentQuote, SearchResult, DEFAULT_ASSET_TYPE,
    SEARCH_RESULT_LIMIT,
};

// Re-export error types
pub use errors::{ErrorClass, MarketDataError};

// Re-export resolver types
pub use resolver::{
    is_premium_index, CryptoQuoteStrategy, InstrumentResolver, ProfileStrategy, Resolution,
    ResolveStrategy, YahooResolver, PREMIUM_INDEX_SYMBOLS,
};

// Re-export provider types
pub use provider::fmp::FmpProvider;
pub use provider::yahoo::YahooProvider;
pub use provider::MarketDataProvider;

// Re-export search types
pub use search::SymbolSearchAggregator;

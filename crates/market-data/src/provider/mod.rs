//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - Concrete provider implementations (FMP, Yahoo Finance)
//!
//! # Architecture
//!
//! Providers are dumb pipes: they fetch, classify transport failures, and
//! parse payloads into the neutral model structs. Which provider gets asked,
//! in what order, and what counts as a terminal miss is decided one level up
//! in the resolver module, not in the providers themselves.

mod traits;

// Provider implementations
pub mod fmp;
pub mod yahoo;

// Re-exports
pub use fmp::FmpProvider;
pub use traits::MarketDataProvider;
pub use yahoo::YahooProvider;

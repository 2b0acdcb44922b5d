//! Profile resolution for market data providers.
//!
//! This module turns a requested symbol (e.g., "AAPL", "btcusd") into a
//! complete asset profile by asking provider endpoints in a fixed order.
//!
//! # Architecture
//!
//! The resolver uses a chain of responsibility pattern:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   InstrumentResolver                     │
//! │                                                          │
//! │  canonicalize (trim + uppercase)                         │
//! │  premium index gate (^GSPC, ^DJI, ...) -> AccessDenied   │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │ 1. ProfileStrategy                                 │  │
//! │  │    - fundamentals profile from the provider        │  │
//! │  │    - quote refresh for a fresher price (best       │  │
//! │  │      effort, failures tolerated)                   │  │
//! │  └────────────────────────────────────────────────────┘  │
//! │                          │ miss                          │
//! │                          ▼                               │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │ 2. CryptoQuoteStrategy                             │  │
//! │  │    - bare quote, profile synthesized around it     │  │
//! │  └────────────────────────────────────────────────────┘  │
//! │                          │ miss                          │
//! │                          ▼                               │
//! │                    SymbolNotFound                        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! A strategy miss (`NotFound`) hands over to the next strategy; a strategy
//! failure (rate limit, access denied, transport) stops the chain right
//! there and surfaces as-is. Only full exhaustion becomes `SymbolNotFound`.
//!
//! [`YahooResolver`] lives next to the chain rather than inside it: it
//! backs a separate lookup endpoint with its own semantics (no premium
//! gate, chart metadata instead of fundamentals).

mod chain;
mod crypto_strategy;
mod profile_strategy;
mod traits;
mod yahoo_resolver;

// Re-export main types
pub use chain::{is_premium_index, InstrumentResolver, PREMIUM_INDEX_SYMBOLS};
pub use crypto_strategy::CryptoQuoteStrategy;
pub use profile_strategy::ProfileStrategy;
pub use traits::{Resolution, ResolveStrategy};
pub use yahoo_resolver::YahooResolver;

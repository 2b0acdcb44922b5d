//! Horizon Core - Domain entities, services, and traits.
//!
//! This crate contains the onboarding business logic for Horizon:
//! users, portfolios, holdings, and risk assessments. Persistence sits
//! behind repository traits; [`store::MemoryStore`] is the in-process
//! implementation every service runs on.

pub mod errors;
pub mod holdings;
pub mod portfolios;
pub mod risk;
pub mod store;
pub mod users;

// Re-export common types from the user and portfolio modules
pub use portfolios::*;
pub use users::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

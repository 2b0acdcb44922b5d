pub mod portfolios_model;
pub mod portfolios_service;
pub mod portfolios_traits;

pub use portfolios_model::*;
pub use portfolios_service::*;
pub use portfolios_traits::*;

use async_trait::async_trait;

use crate::errors::Result;
use crate::holdings::holdings_model::{Holding, NewHolding};

/// Trait for holding repository operations
#[async_trait]
pub trait HoldingRepositoryTrait: Send + Sync {
    /// Insert a holding, assigning its id and creation timestamp.
    async fn insert_holding(&self, new_holding: NewHolding) -> Result<Holding>;

    async fn list_holdings_for_portfolio(&self, portfolio_id: i64) -> Result<Vec<Holding>>;
}

/// Trait for holding service operations
#[async_trait]
pub trait HoldingServiceTrait: Send + Sync {
    async fn add_holding(&self, new_holding: NewHolding) -> Result<Holding>;
}

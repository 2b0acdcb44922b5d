use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use crate::errors::{Error, Result, ValidationError};
use crate::holdings::holdings_model::{Holding, NewHolding};
use crate::holdings::holdings_traits::{HoldingRepositoryTrait, HoldingServiceTrait};
use crate::portfolios::portfolios_traits::PortfolioRepositoryTrait;

/// Service for managing holdings
pub struct HoldingService<P: PortfolioRepositoryTrait, H: HoldingRepositoryTrait> {
    portfolio_repo: Arc<P>,
    holding_repo: Arc<H>,
}

impl<P: PortfolioRepositoryTrait, H: HoldingRepositoryTrait> HoldingService<P, H> {
    /// Creates a new HoldingService instance
    pub fn new(portfolio_repo: Arc<P>, holding_repo: Arc<H>) -> Self {
        HoldingService {
            portfolio_repo,
            holding_repo,
        }
    }
}

#[async_trait]
impl<P: PortfolioRepositoryTrait, H: HoldingRepositoryTrait> HoldingServiceTrait
    for HoldingService<P, H>
{
    /// Add a position to a portfolio the requesting user owns.
    async fn add_holding(&self, new_holding: NewHolding) -> Result<Holding> {
        let user_id = new_holding.user_id.trim();
        let symbol = new_holding.symbol.trim().to_uppercase();
        if user_id.is_empty() || symbol.is_empty() {
            return Err(ValidationError::InvalidInput(
                "Todos los campos son obligatorios (incluyendo user_id)".to_string(),
            )
            .into());
        }

        if new_holding.quantity <= Decimal::ZERO || new_holding.acquisition_price <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "La cantidad y el precio deben ser mayores a 0".to_string(),
            )
            .into());
        }

        let owned = self
            .portfolio_repo
            .find_portfolio(new_holding.portfolio_id)
            .await?
            .is_some_and(|p| p.user_id == user_id);
        if !owned {
            return Err(Error::AccessDenied(
                "Portafolio no encontrado o no autorizado".to_string(),
            ));
        }

        debug!(
            "Adding {} x{} to portfolio {}",
            symbol, new_holding.quantity, new_holding.portfolio_id
        );

        self.holding_repo
            .insert_holding(NewHolding {
                user_id: user_id.to_string(),
                symbol,
                ..new_holding
            })
            .await
    }
}

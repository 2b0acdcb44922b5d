use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::{Error, Result, ValidationError};
use crate::portfolios::portfolios_traits::PortfolioRepositoryTrait;
use crate::risk::risk_model::{
    InvestmentPurpose, NewRiskAssessment, RiskAssessment, RiskReaction, TimeHorizon,
};
use crate::risk::risk_traits::{RiskRepositoryTrait, RiskServiceTrait};

/// Service for managing risk assessments
pub struct RiskService<P: PortfolioRepositoryTrait, R: RiskRepositoryTrait> {
    portfolio_repo: Arc<P>,
    risk_repo: Arc<R>,
}

impl<P: PortfolioRepositoryTrait, R: RiskRepositoryTrait> RiskService<P, R> {
    /// Creates a new RiskService instance
    pub fn new(portfolio_repo: Arc<P>, risk_repo: Arc<R>) -> Self {
        RiskService {
            portfolio_repo,
            risk_repo,
        }
    }
}

#[async_trait]
impl<P: PortfolioRepositoryTrait, R: RiskRepositoryTrait> RiskServiceTrait for RiskService<P, R> {
    /// Save the questionnaire answers for a portfolio the user owns.
    ///
    /// Ownership is checked before the answers are mapped, so a foreign
    /// portfolio id earns a denial even when the answers are garbage.
    async fn save_assessment(&self, submission: NewRiskAssessment) -> Result<RiskAssessment> {
        let user_id = submission.user_id.trim();
        let purpose = submission.purpose.trim();
        let time_horizon = submission.time_horizon.trim();
        let risk_reaction = submission.risk_reaction.trim();
        if user_id.is_empty()
            || purpose.is_empty()
            || time_horizon.is_empty()
            || risk_reaction.is_empty()
        {
            return Err(ValidationError::InvalidInput(
                "Todos los campos son obligatorios (user_id, portfolio_id, purpose, time_horizon, risk_reaction)"
                    .to_string(),
            )
            .into());
        }

        let owned = self
            .portfolio_repo
            .find_portfolio(submission.portfolio_id)
            .await?
            .is_some_and(|p| p.user_id == user_id);
        if !owned {
            return Err(Error::AccessDenied(
                "Portafolio no encontrado o no autorizado".to_string(),
            ));
        }

        let purpose = InvestmentPurpose::from_input(purpose).ok_or_else(|| {
            ValidationError::InvalidInput(format!(
                "Valor de propósito no válido: {}",
                submission.purpose.trim()
            ))
        })?;
        let time_horizon = TimeHorizon::from_input(time_horizon).ok_or_else(|| {
            ValidationError::InvalidInput(format!(
                "Valor de horizonte temporal no válido: {}",
                submission.time_horizon.trim()
            ))
        })?;
        let risk_reaction = RiskReaction::from_input(risk_reaction).ok_or_else(|| {
            ValidationError::InvalidInput(format!(
                "Valor de reacción al riesgo no válido: {}",
                submission.risk_reaction.trim()
            ))
        })?;

        debug!(
            "Saving risk assessment for portfolio {} ({}, {}, {})",
            submission.portfolio_id,
            purpose.as_str(),
            time_horizon.as_str(),
            risk_reaction.as_str()
        );

        self.risk_repo
            .upsert_assessment(submission.portfolio_id, purpose, time_horizon, risk_reaction)
            .await
    }
}

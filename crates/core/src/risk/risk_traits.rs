use async_trait::async_trait;

use crate::errors::Result;
use crate::risk::risk_model::{
    InvestmentPurpose, NewRiskAssessment, RiskAssessment, RiskReaction, TimeHorizon,
};

/// Trait for risk assessment repository operations
#[async_trait]
pub trait RiskRepositoryTrait: Send + Sync {
    /// Insert or overwrite the assessment for a portfolio.
    ///
    /// A portfolio keeps at most one assessment; saving again replaces
    /// the answers but keeps the original row id.
    async fn upsert_assessment(
        &self,
        portfolio_id: i64,
        purpose: InvestmentPurpose,
        time_horizon: TimeHorizon,
        risk_reaction: RiskReaction,
    ) -> Result<RiskAssessment>;

    async fn find_assessment(&self, portfolio_id: i64) -> Result<Option<RiskAssessment>>;
}

/// Trait for risk assessment service operations
#[async_trait]
pub trait RiskServiceTrait: Send + Sync {
    async fn save_assessment(&self, submission: NewRiskAssessment) -> Result<RiskAssessment>;
}

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::errors::Result;
use crate::holdings::holdings_model::{Holding, NewHolding};
use crate::holdings::holdings_traits::HoldingRepositoryTrait;
use crate::portfolios::portfolios_model::{NewPortfolio, Portfolio, PortfolioSummary};
use crate::portfolios::portfolios_traits::PortfolioRepositoryTrait;
use crate::risk::risk_model::{InvestmentPurpose, RiskAssessment, RiskReaction, TimeHorizon};
use crate::risk::risk_traits::RiskRepositoryTrait;
use crate::users::users_model::User;
use crate::users::users_traits::UserRepositoryTrait;

/// Process-local store backing every repository trait.
///
/// One instance is shared across all services. Rows live in maps behind
/// async locks; numeric ids are handed out from counters starting at 1.
pub struct MemoryStore {
    users: RwLock<HashMap<String, User>>,
    portfolios: RwLock<HashMap<i64, Portfolio>>,
    holdings: RwLock<HashMap<i64, Holding>>,
    /// Keyed by portfolio id; a portfolio keeps at most one assessment.
    assessments: RwLock<HashMap<i64, RiskAssessment>>,
    next_portfolio_id: AtomicI64,
    next_holding_id: AtomicI64,
    next_assessment_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            users: RwLock::new(HashMap::new()),
            portfolios: RwLock::new(HashMap::new()),
            holdings: RwLock::new(HashMap::new()),
            assessments: RwLock::new(HashMap::new()),
            next_portfolio_id: AtomicI64::new(1),
            next_holding_id: AtomicI64::new(1),
            next_assessment_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepositoryTrait for MemoryStore {
    async fn insert_user(&self, user: User) -> Result<User> {
        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn find_user(&self, user_id: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(user_id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn mark_onboarding_complete(&self, user_id: &str) -> Result<Option<User>> {
        let mut users = self.users.write().await;
        Ok(users.get_mut(user_id).map(|user| {
            user.has_completed_onboarding = true;
            user.clone()
        }))
    }
}

#[async_trait]
impl PortfolioRepositoryTrait for MemoryStore {
    async fn insert_portfolio(&self, new_portfolio: NewPortfolio) -> Result<Portfolio> {
        let portfolio = Portfolio {
            id: self.next_portfolio_id.fetch_add(1, Ordering::SeqCst),
            user_id: new_portfolio.user_id,
            name: new_portfolio.name,
            description: new_portfolio.description,
            created_at: Utc::now(),
        };

        let mut portfolios = self.portfolios.write().await;
        portfolios.insert(portfolio.id, portfolio.clone());
        Ok(portfolio)
    }

    async fn find_portfolio(&self, portfolio_id: i64) -> Result<Option<Portfolio>> {
        let portfolios = self.portfolios.read().await;
        Ok(portfolios.get(&portfolio_id).cloned())
    }

    async fn list_summaries_for_user(&self, user_id: &str) -> Result<Vec<PortfolioSummary>> {
        let portfolios = self.portfolios.read().await;
        let holdings = self.holdings.read().await;

        let mut summaries: Vec<PortfolioSummary> = portfolios
            .values()
            .filter(|p| p.user_id == user_id)
            .map(|p| PortfolioSummary {
                id: p.id,
                name: p.name.clone(),
                description: p.description.clone(),
                created_at: p.created_at,
                asset_count: holdings.values().filter(|h| h.portfolio_id == p.id).count(),
            })
            .collect();

        summaries.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(summaries)
    }
}

#[async_trait]
impl HoldingRepositoryTrait for MemoryStore {
    async fn insert_holding(&self, new_holding: NewHolding) -> Result<Holding> {
        let holding = Holding {
            id: self.next_holding_id.fetch_add(1, Ordering::SeqCst),
            portfolio_id: new_holding.portfolio_id,
            symbol: new_holding.symbol,
            quantity: new_holding.quantity,
            acquisition_price: new_holding.acquisition_price,
            acquisition_date: new_holding.acquisition_date,
            created_at: Utc::now(),
        };

        let mut holdings = self.holdings.write().await;
        holdings.insert(holding.id, holding.clone());
        Ok(holding)
    }

    async fn list_holdings_for_portfolio(&self, portfolio_id: i64) -> Result<Vec<Holding>> {
        let holdings = self.holdings.read().await;
        let mut rows: Vec<Holding> = holdings
            .values()
            .filter(|h| h.portfolio_id == portfolio_id)
            .cloned()
            .collect();
        rows.sort_by_key(|h| h.id);
        Ok(rows)
    }
}

#[async_trait]
impl RiskRepositoryTrait for MemoryStore {
    async fn upsert_assessment(
        &self,
        portfolio_id: i64,
        purpose: InvestmentPurpose,
        time_horizon: TimeHorizon,
        risk_reaction: RiskReaction,
    ) -> Result<RiskAssessment> {
        let mut assessments = self.assessments.write().await;

        let assessment = match assessments.get(&portfolio_id) {
            Some(existing) => RiskAssessment {
                id: existing.id,
                portfolio_id,
                purpose,
                time_horizon,
                risk_reaction,
                updated_at: Utc::now(),
            },
            None => RiskAssessment {
                id: self.next_assessment_id.fetch_add(1, Ordering::SeqCst),
                portfolio_id,
                purpose,
                time_horizon,
                risk_reaction,
                updated_at: Utc::now(),
            },
        };

        assessments.insert(portfolio_id, assessment.clone());
        Ok(assessment)
    }

    async fn find_assessment(&self, portfolio_id: i64) -> Result<Option<RiskAssessment>> {
        let assessments = self.assessments.read().await;
        Ok(assessments.get(&portfolio_id).cloned())
    }
}

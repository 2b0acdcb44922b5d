use async_trait::async_trait;

use crate::errors::Result;
use crate::portfolios::portfolios_model::{NewPortfolio, Portfolio, PortfolioSummary};

/// Trait for portfolio repository operations
#[async_trait]
pub trait PortfolioRepositoryTrait: Send + Sync {
    /// Insert a portfolio, assigning its id and creation timestamp.
    async fn insert_portfolio(&self, new_portfolio: NewPortfolio) -> Result<Portfolio>;

    async fn find_portfolio(&self, portfolio_id: i64) -> Result<Option<Portfolio>>;

    /// List a user's portfolios with their holding counts, newest first.
    async fn list_summaries_for_user(&self, user_id: &str) -> Result<Vec<PortfolioSummary>>;
}

/// Trait for portfolio service operations
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    async fn create_portfolio(&self, new_portfolio: NewPortfolio) -> Result<Portfolio>;

    async fn get_portfolios(&self, user_id: &str) -> Result<Vec<PortfolioSummary>>;
}

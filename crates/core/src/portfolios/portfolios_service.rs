use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::{Error, Result, ValidationError};
use crate::portfolios::portfolios_model::{NewPortfolio, Portfolio, PortfolioSummary};
use crate::portfolios::portfolios_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
use crate::users::users_traits::UserRepositoryTrait;

/// Service for managing portfolios
pub struct PortfolioService<P: PortfolioRepositoryTrait, U: UserRepositoryTrait> {
    portfolio_repo: Arc<P>,
    user_repo: Arc<U>,
}

impl<P: PortfolioRepositoryTrait, U: UserRepositoryTrait> PortfolioService<P, U> {
    /// Creates a new PortfolioService instance
    pub fn new(portfolio_repo: Arc<P>, user_repo: Arc<U>) -> Self {
        PortfolioService {
            portfolio_repo,
            user_repo,
        }
    }
}

#[async_trait]
impl<P: PortfolioRepositoryTrait, U: UserRepositoryTrait> PortfolioServiceTrait
    for PortfolioService<P, U>
{
    async fn create_portfolio(&self, new_portfolio: NewPortfolio) -> Result<Portfolio> {
        let user_id = new_portfolio.user_id.trim();
        if user_id.is_empty() {
            return Err(ValidationError::MissingField("user_id".to_string()).into());
        }

        let name = new_portfolio.name.trim();
        if name.is_empty() {
            return Err(ValidationError::InvalidInput(
                "El nombre del portafolio es obligatorio".to_string(),
            )
            .into());
        }

        if self.user_repo.find_user(user_id).await?.is_none() {
            return Err(Error::NotFound("Usuario no encontrado".to_string()));
        }

        let description = new_portfolio
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        debug!("Creating portfolio '{}' for {}", name, user_id);

        self.portfolio_repo
            .insert_portfolio(NewPortfolio {
                user_id: user_id.to_string(),
                name: name.to_string(),
                description,
            })
            .await
    }

    async fn get_portfolios(&self, user_id: &str) -> Result<Vec<PortfolioSummary>> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(ValidationError::MissingField("user_id".to_string()).into());
        }

        self.portfolio_repo.list_summaries_for_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::users::users_model::NewUser;
    use crate::users::users_service::UserService;
    use crate::users::users_traits::UserServiceTrait;

    async fn store_with_user(user_id: &str) -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        let users = UserService::new(store.clone());
        users
            .register_user(NewUser {
                user_id: user_id.to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: format!("{}@example.com", user_id),
                birth_date: None,
                gender: None,
            })
            .await
            .unwrap();
        store
    }

    fn payload(user_id: &str, name: &str, description: Option<&str>) -> NewPortfolio {
        NewPortfolio {
            user_id: user_id.to_string(),
            name: name.to_string(),
            description: description.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_create_portfolio() {
        let store = store_with_user("auth0|1").await;
        let service = PortfolioService::new(store.clone(), store);

        let portfolio = service
            .create_portfolio(payload("auth0|1", "  Retiro  ", Some("  Largo plazo ")))
            .await
            .unwrap();

        assert_eq!(portfolio.name, "Retiro");
        assert_eq!(portfolio.description, Some("Largo plazo".to_string()));
        assert_eq!(portfolio.user_id, "auth0|1");
    }

    #[tokio::test]
    async fn test_blank_description_becomes_none() {
        let store = store_with_user("auth0|1").await;
        let service = PortfolioService::new(store.clone(), store);

        let portfolio = service
            .create_portfolio(payload("auth0|1", "Retiro", Some("   ")))
            .await
            .unwrap();

        assert!(portfolio.description.is_none());
    }

    #[tokio::test]
    async fn test_blank_name_rejected() {
        let store = store_with_user("auth0|1").await;
        let service = PortfolioService::new(store.clone(), store);

        let err = service
            .create_portfolio(payload("auth0|1", "   ", None))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.user_message(), "El nombre del portafolio es obligatorio");
    }

    #[tokio::test]
    async fn test_unknown_user_rejected() {
        let store = Arc::new(MemoryStore::new());
        let service = PortfolioService::new(store.clone(), store);

        let err = service
            .create_portfolio(payload("auth0|404", "Retiro", None))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_portfolios_newest_first_with_counts() {
        let store = store_with_user("auth0|1").await;
        let service = PortfolioService::new(store.clone(), store.clone());

        let first = service
            .create_portfolio(payload("auth0|1", "Retiro", None))
            .await
            .unwrap();
        let second = service
            .create_portfolio(payload("auth0|1", "Vivienda", None))
            .await
            .unwrap();

        let summaries = service.get_portfolios("auth0|1").await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, second.id);
        assert_eq!(summaries[1].id, first.id);
        assert_eq!(summaries[0].asset_count, 0);
    }

    #[tokio::test]
    async fn test_get_portfolios_requires_user_id() {
        let store = Arc::new(MemoryStore::new());
        let service = PortfolioService::new(store.clone(), store);

        let err = service.get_portfolios("  ").await.unwrap_err();
        assert_eq!(err.user_message(), "user_id es requerido");
    }
}

use chrono::NaiveDate;
use horizon_core::holdings::NewHolding;
use horizon_core::portfolios::NewPortfolio;
use horizon_core::users::User;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Response wrapper used by the Yahoo-backed routes.
#[derive(Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> Envelope<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Envelope {
            success: true,
            data,
            message: message.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteOnboardingRequest {
    #[serde(default)]
    pub user_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingStatus {
    pub user_id: String,
    pub has_completed_onboarding: bool,
}

impl From<User> for OnboardingStatus {
    fn from(user: User) -> Self {
        OnboardingStatus {
            user_id: user.id,
            has_completed_onboarding: user.has_completed_onboarding,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortfolioRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub portfolio_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<CreatePortfolioRequest> for NewPortfolio {
    fn from(req: CreatePortfolioRequest) -> Self {
        NewPortfolio {
            user_id: req.user_id,
            name: req.portfolio_name,
            description: req.description,
        }
    }
}

/// add-asset body. Fields are optional at the wire level so the handler
/// can answer the product's all-fields-required message instead of a
/// deserialization rejection.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAssetRequest {
    #[serde(default)]
    pub portfolio_id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub asset_symbol: Option<String>,
    #[serde(default)]
    pub quantity: Option<Decimal>,
    #[serde(default)]
    pub acquisition_price: Option<Decimal>,
    #[serde(default)]
    pub acquisition_date: Option<NaiveDate>,
}

impl AddAssetRequest {
    /// None when any required field is absent.
    pub fn into_new_holding(self) -> Option<NewHolding> {
        Some(NewHolding {
            portfolio_id: self.portfolio_id?,
            user_id: self.user_id?,
            symbol: self.asset_symbol?,
            quantity: self.quantity?,
            acquisition_price: self.acquisition_price?,
            acquisition_date: self.acquisition_date?,
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRiskAssessmentRequest {
    #[serde(default)]
    pub portfolio_id: Option<i64>,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub time_horizon: String,
    #[serde(default)]
    pub risk_reaction: String,
}

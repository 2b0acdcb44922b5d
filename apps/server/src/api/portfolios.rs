use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use horizon_core::portfolios::{Portfolio, PortfolioSummary};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState, models::CreatePortfolioRequest};

async fn create_portfolio(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePortfolioRequest>,
) -> ApiResult<(StatusCode, Json<Portfolio>)> {
    let portfolio = state
        .portfolio_service
        .create_portfolio(payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(portfolio)))
}

#[derive(Deserialize)]
struct PortfoliosQuery {
    #[serde(default)]
    user_id: String,
}

async fn get_portfolios(
    State(state): State<Arc<AppState>>,
    Query(q): Query<PortfoliosQuery>,
) -> ApiResult<Json<Vec<PortfolioSummary>>> {
    let summaries = state.portfolio_service.get_portfolios(&q.user_id).await?;
    Ok(Json(summaries))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create-portfolio", post(create_portfolio))
        .route("/get-portfolios", get(get_portfolios))
}

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use horizon_core::risk::{NewRiskAssessment, RiskAssessment};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::SaveRiskAssessmentRequest,
};

async fn save_risk_assessment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SaveRiskAssessmentRequest>,
) -> ApiResult<Json<RiskAssessment>> {
    let Some(portfolio_id) = payload.portfolio_id else {
        return Err(ApiError::BadRequest(
            "Todos los campos son obligatorios (user_id, portfolio_id, purpose, time_horizon, risk_reaction)"
                .to_string(),
        ));
    };
    let assessment = state
        .risk_service
        .save_assessment(NewRiskAssessment {
            user_id: payload.user_id,
            portfolio_id,
            purpose: payload.purpose,
            time_horizon: payload.time_horizon,
            risk_reaction: payload.risk_reaction,
        })
        .await?;
    Ok(Json(assessment))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/save-risk-assessment", post(save_risk_assessment))
}

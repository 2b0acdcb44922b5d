use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use horizon_core::users::{NewUser, User};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{CompleteOnboardingRequest, OnboardingStatus},
};

async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewUser>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = state.user_service.register_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn complete_onboarding(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CompleteOnboardingRequest>,
) -> ApiResult<Json<OnboardingStatus>> {
    let user_id = payload.user_id.trim();
    if user_id.is_empty() {
        return Err(ApiError::BadRequest("user_id es requerido".to_string()));
    }
    let user = state.user_service.complete_onboarding(user_id).await?;
    Ok(Json(OnboardingStatus::from(user)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create-user", post(create_user))
        .route("/complete-onboarding", post(complete_onboarding))
}

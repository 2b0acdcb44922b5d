use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use horizon_core::holdings::Holding;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::AddAssetRequest,
};

async fn add_asset(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AddAssetRequest>,
) -> ApiResult<(StatusCode, Json<Holding>)> {
    let new_holding = payload.into_new_holding().ok_or_else(|| {
        ApiError::BadRequest("Todos los campos son obligatorios (incluyendo user_id)".to_string())
    })?;
    let holding = state.holding_service.add_holding(new_holding).await?;
    Ok((StatusCode::CREATED, Json(holding)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/add-asset", post(add_asset))
}

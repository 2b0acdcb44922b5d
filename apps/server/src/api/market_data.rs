use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use horizon_market_data::{is_premium_index, AssetProfile, MarketDataError, SearchResult};
use serde::Deserialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::Envelope,
};

const RATE_LIMIT_COPY: &str = "Límite de requests excedido. Intenta nuevamente en unos minutos.";
const MISSING_KEY_COPY: &str =
    "API key no configurada. Asegúrate de configurar FMP_API_KEY en tu archivo .env.local";
const PROFILE_FAILURE_COPY: &str = "Error al obtener información del activo";
const SEARCH_FAILURE_COPY: &str = "Error interno del servidor";

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    query: String,
}

#[derive(Deserialize)]
struct SymbolQuery {
    #[serde(default)]
    symbol: String,
}

async fn search_assets(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SearchQuery>,
) -> ApiResult<Json<Vec<SearchResult>>> {
    if q.query.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "El parámetro \"query\" es requerido.".to_string(),
        ));
    }
    let results = state
        .search
        .search(&q.query)
        .await
        .map_err(|e| market_error(e, SEARCH_FAILURE_COPY))?;
    Ok(Json(results))
}

async fn get_asset_profile(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SymbolQuery>,
) -> ApiResult<Json<AssetProfile>> {
    if q.symbol.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "El parámetro \"symbol\" es requerido.".to_string(),
        ));
    }
    let profile = state
        .resolver
        .resolve(&q.symbol)
        .await
        .map_err(|e| market_error(e, PROFILE_FAILURE_COPY))?;
    Ok(Json(profile))
}

async fn yahoo_search_assets(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SearchQuery>,
) -> ApiResult<Json<Envelope<Vec<SearchResult>>>> {
    if q.query.trim().len() < 2 {
        return Err(ApiError::BadRequest(
            "Query debe tener al menos 2 caracteres".to_string(),
        ));
    }
    let results = state
        .yahoo_search
        .search(&q.query)
        .await
        .map_err(|e| yahoo_error(e, SEARCH_FAILURE_COPY))?;
    let message = format!("{} resultados encontrados", results.len());
    Ok(Json(Envelope::ok(results, message)))
}

async fn yahoo_get_asset_profile(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SymbolQuery>,
) -> ApiResult<Json<Envelope<AssetProfile>>> {
    if q.symbol.trim().is_empty() {
        return Err(ApiError::BadRequest("Symbol es requerido".to_string()));
    }
    let profile = state
        .yahoo_resolver
        .resolve(&q.symbol)
        .await
        .map_err(|e| yahoo_error(e, PROFILE_FAILURE_COPY))?;
    Ok(Json(Envelope::ok(profile, "Perfil obtenido exitosamente")))
}

/// Translate primary-chain failures into the product's answers.
fn market_error(err: MarketDataError, upstream_copy: &str) -> ApiError {
    match err {
        MarketDataError::InvalidQuery(message) => ApiError::BadRequest(message),
        MarketDataError::AccessDenied { symbol } => denied(&symbol),
        MarketDataError::SymbolNotFound(symbol) => ApiError::NotFound(format!(
            "Activo {} no encontrado en ninguna fuente de datos",
            symbol
        )),
        MarketDataError::RateLimited { .. } => ApiError::RateLimited(RATE_LIMIT_COPY.to_string()),
        MarketDataError::MissingApiKey { .. } => {
            ApiError::Configuration(MISSING_KEY_COPY.to_string())
        }
        other => {
            tracing::error!("Market data failure: {}", other);
            ApiError::Upstream(upstream_copy.to_string())
        }
    }
}

/// The Yahoo routes keep their own not-found copy; everything else follows
/// the same table.
fn yahoo_error(err: MarketDataError, upstream_copy: &str) -> ApiError {
    match err {
        MarketDataError::InvalidQuery(message) => ApiError::BadRequest(message),
        MarketDataError::SymbolNotFound(_) => ApiError::NotFound(
            "Símbolo no encontrado. Verifica que el símbolo sea correcto.".to_string(),
        ),
        MarketDataError::RateLimited { .. } => ApiError::RateLimited(RATE_LIMIT_COPY.to_string()),
        other => {
            tracing::error!("Yahoo lookup failure: {}", other);
            ApiError::Upstream(upstream_copy.to_string())
        }
    }
}

fn denied(symbol: &str) -> ApiError {
    if is_premium_index(symbol) {
        ApiError::Denied(format!(
            "El símbolo {} (índice) requiere un plan premium de Financial Modeling Prep.",
            symbol
        ))
    } else {
        ApiError::Denied(format!(
            "Acceso denegado para {}. El símbolo puede requerir un plan premium o haber alcanzado el límite de la API.",
            symbol
        ))
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/search-assets", get(search_assets))
        .route("/get-asset-profile", get(get_asset_profile))
        .route("/yahoo-search-assets", get(yahoo_search_assets))
        .route("/yahoo-get-asset-profile", get(yahoo_get_asset_profile))
}

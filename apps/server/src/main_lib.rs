use std::sync::Arc;

use crate::config::Config;
use horizon_core::{
    holdings::{HoldingService, HoldingServiceTrait},
    portfolios::{PortfolioService, PortfolioServiceTrait},
    risk::{RiskService, RiskServiceTrait},
    store::MemoryStore,
    users::{UserService, UserServiceTrait},
};
use horizon_market_data::{
    FmpProvider, InstrumentResolver, MarketDataProvider, SymbolSearchAggregator, YahooProvider,
    YahooResolver,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub resolver: InstrumentResolver,
    pub yahoo_resolver: YahooResolver,
    pub search: SymbolSearchAggregator,
    pub yahoo_search: SymbolSearchAggregator,
    pub user_service: Arc<dyn UserServiceTrait + Send + Sync>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait + Send + Sync>,
    pub holding_service: Arc<dyn HoldingServiceTrait + Send + Sync>,
    pub risk_service: Arc<dyn RiskServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("HORIZON_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Wire every service to the shared in-memory store and the two market
/// data providers.
pub fn build_state(config: &Config) -> Arc<AppState> {
    let store = Arc::new(MemoryStore::new());

    let fmp: Arc<dyn MarketDataProvider> = Arc::new(FmpProvider::new(config.fmp_api_key.clone()));
    let yahoo = Arc::new(YahooProvider::new());

    Arc::new(AppState {
        resolver: InstrumentResolver::new(fmp.clone()),
        yahoo_resolver: YahooResolver::new(yahoo.clone()),
        search: SymbolSearchAggregator::new(fmp),
        yahoo_search: SymbolSearchAggregator::new(yahoo),
        user_service: Arc::new(UserService::new(store.clone())),
        portfolio_service: Arc::new(PortfolioService::new(store.clone(), store.clone())),
        holding_service: Arc::new(HoldingService::new(store.clone(), store.clone())),
        risk_service: Arc::new(RiskService::new(store.clone(), store)),
    })
}

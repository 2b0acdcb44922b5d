use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub fmp_api_key: Option<String>,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("HORIZON_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid HORIZON_LISTEN_ADDR");
        // Absence is not fatal here; the profile and search routes answer
        // with a configuration error until the key is provided.
        let fmp_api_key = std::env::var("FMP_API_KEY").ok().filter(|k| !k.is_empty());
        let cors_allow = std::env::var("HORIZON_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("HORIZON_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Self {
            listen_addr,
            fmp_api_key,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        }
    }
}

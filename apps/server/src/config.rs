use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;
use coinboard_core::constants::SNAPSHOT_FILE_NAME;
use coinboard_market_data::COINGECKO_BASE_URL;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub snapshot_path: PathBuf,
    pub upstream_url: String,
    pub upstream_timeout: Duration,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            static_dir: "static".to_string(),
            snapshot_path: PathBuf::from(SNAPSHOT_FILE_NAME),
            upstream_url: COINGECKO_BASE_URL.to_string(),
            upstream_timeout: Duration::from_millis(10000),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr = match std::env::var("CB_LISTEN_ADDR") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid CB_LISTEN_ADDR: {}", raw))?,
            Err(_) => defaults.listen_addr,
        };
        let cors_allow = std::env::var("CB_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let static_dir = std::env::var("CB_STATIC_DIR").unwrap_or(defaults.static_dir);
        let snapshot_path = std::env::var("CB_SNAPSHOT_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.snapshot_path);
        let upstream_url = std::env::var("CB_UPSTREAM_URL").unwrap_or(defaults.upstream_url);
        let log_format = std::env::var("CB_LOG_FORMAT").unwrap_or(defaults.log_format);

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: millis_from_env("CB_REQUEST_TIMEOUT_MS", defaults.request_timeout),
            static_dir,
            snapshot_path,
            upstream_url,
            upstream_timeout: millis_from_env("CB_UPSTREAM_TIMEOUT_MS", defaults.upstream_timeout),
            log_format,
        })
    }
}

fn millis_from_env(key: &str, default: Duration) -> Duration {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}

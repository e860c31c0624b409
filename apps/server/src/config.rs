use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use keywordlab_keyword_data::{max_aggregation_time, KeywordDataConfig};

/// Headroom on top of the slowest possible aggregation run.
const REQUEST_TIMEOUT_MARGIN: Duration = Duration::from_secs(30);

/// Smallest request timeout the server accepts. A shorter deadline would
/// cut off a run while its providers are still within their own timeouts.
pub fn min_request_timeout() -> Duration {
    max_aggregation_time() + REQUEST_TIMEOUT_MARGIN
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub keyword_data: KeywordDataConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = lookup("KL_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid KL_LISTEN_ADDR")?;
        let cors_allow = lookup("KL_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        // Values below the floor are raised to it.
        let request_timeout = lookup("KL_REQUEST_TIMEOUT_MS")
            .and_then(|ms| ms.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or_default()
            .max(min_request_timeout());
        let keyword_data = KeywordDataConfig::from_lookup(&lookup);
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout,
            keyword_data,
        })
    }
}

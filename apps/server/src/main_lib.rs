use std::sync::Arc;

use keywordlab_keyword_data::Aggregator;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub aggregator: Aggregator,
}

pub fn init_tracing() {
    let log_format = std::env::var("KL_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
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

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let aggregator = Aggregator::from_config(&config.keyword_data);
    let keys = aggregator.keys_configured();
    tracing::info!(
        datalab = keys.datalab,
        searchad = keys.searchad,
        openai = keys.openai,
        "Keyword providers configured"
    );
    Ok(Arc::new(AppState { aggregator }))
}

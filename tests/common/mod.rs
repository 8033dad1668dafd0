#![allow(dead_code)]

pub mod mock_indexer;

use axum::Router;
use explorer_gateway::{
    config::{Config, IndexerConfig},
    errors::AppError,
    server::{build, state::AppState},
};
use std::{
    sync::{Arc, LazyLock},
    time::Duration,
};

static INIT_LOGGING: LazyLock<()> = LazyLock::new(|| {
    tracing_subscriber::fmt::init();
});

pub fn initialize_logging() {
    let _ = INIT_LOGGING;
}

pub fn test_config(indexer_endpoint: String) -> Arc<Config> {
    let config = Config {
        server_address: "0.0.0.0".parse().unwrap(),
        server_port: 3000,
        log_level: tracing::Level::INFO,
        indexer: IndexerConfig {
            endpoint: indexer_endpoint,
            request_timeout: Duration::from_secs(5),
        },
    };

    Arc::new(config)
}

pub fn build_app(indexer_endpoint: String) -> Result<(Router, AppState), AppError> {
    build(test_config(indexer_endpoint))
}

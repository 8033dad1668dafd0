use crate::errors::GatewayError;
use axum::Json;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::Level;

#[derive(Debug, Clone, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// One page of a listing resource, as handed to the front-end renderer.
///
/// `items` is the upstream indexer's body, passed through verbatim. The
/// indexer's listing endpoints do not report totals, so `total` and
/// `total_pages` are structural zeros.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourcePage {
    pub items: serde_json::Value,
    pub total: u64,
    pub total_pages: u64,
    pub page: i32,
    pub count: i32,
}

pub type ApiResult<T> = Result<Json<T>, GatewayError>;

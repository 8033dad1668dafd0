use crate::cli::Args;
use crate::errors::AppError;
use std::net::IpAddr;
use std::time::Duration;
use tracing::Level;
use url::Url;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_address: IpAddr,
    pub server_port: u16,
    pub log_level: Level,
    pub indexer: IndexerConfig,
}

#[derive(Clone, Debug)]
pub struct IndexerConfig {
    pub endpoint: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, AppError> {
        let endpoint = args
            .indexer_url
            .ok_or(AppError::Config("--indexer-url must be set".into()))?;

        // A malformed base URL is a startup error, not a per-request fault.
        Url::parse(&endpoint)
            .map_err(|e| AppError::Config(format!("invalid --indexer-url '{endpoint}': {e}")))?;

        Ok(Config {
            server_address: args.server_address,
            server_port: args.server_port,
            log_level: args.log_level.into(),
            indexer: IndexerConfig {
                endpoint,
                request_timeout: Duration::from_secs(args.indexer_timeout_sec),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LogLevel;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("explorer-gateway").chain(argv.iter().copied()))
    }

    #[test]
    fn from_args_requires_indexer_url() {
        let err = Config::from_args(args(&[])).unwrap_err();

        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn from_args_rejects_malformed_indexer_url() {
        let err = Config::from_args(args(&["--indexer-url", "not a url"])).unwrap_err();

        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn from_args_builds_config() {
        let config =
            Config::from_args(args(&["--indexer-url", "http://localhost:8080/api/v1/"])).unwrap();

        assert_eq!(config.server_port, 3000);
        assert_eq!(config.log_level, Level::from(LogLevel::Info));
        assert_eq!(config.indexer.endpoint, "http://localhost:8080/api/v1/");
        assert_eq!(config.indexer.request_timeout, Duration::from_secs(30));
    }
}

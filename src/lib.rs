pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod indexer;
pub mod logging;
pub mod pagination;
pub mod server;
pub mod types;

pub use errors::{AppError, GatewayError};

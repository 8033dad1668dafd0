use axum::{
    response::{IntoResponse, Response},
    {Json, http},
};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::{fmt, io};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Indexer client error: {0}")]
    Indexer(String),

    #[error("Server startup error: {0}")]
    Server(String),
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        error!("I/O Error occurred: {}", err);
        AppError::Server(err.to_string())
    }
}

/// Main request-level error type.
/// Contains the following fields:
/// - status_code: the HTTP status code to return
/// - error: a short description of the error
/// - message: a longer description of the error
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GatewayError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        GatewayError::internal_server_error(format!("HTTP error: {e}"))
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(e: serde_json::Error) -> Self {
        GatewayError::internal_server_error(format!("JSON error: {e}"))
    }
}

impl From<url::ParseError> for GatewayError {
    fn from(e: url::ParseError) -> Self {
        GatewayError::internal_server_error(format!("URL error: {e}"))
    }
}

impl GatewayError {
    /// Our custom 404 error
    pub fn not_found() -> Self {
        Self {
            error: "Not Found".to_string(),
            message: "The requested component has not been found.".to_string(),
            status_code: 404,
        }
    }

    /// Our custom 400 error
    pub fn custom_400(message: String) -> Self {
        Self {
            error: "Bad Request".to_string(),
            message,
            status_code: 400,
        }
    }

    /// Failure reported by the indexer; its status code is carried through
    pub fn upstream_failure(status: StatusCode, message: &str) -> Self {
        Self {
            error: status
                .canonical_reason()
                .unwrap_or("Upstream Error")
                .to_string(),
            message: message.to_string(),
            status_code: status.as_u16(),
        }
    }

    pub fn internal_server_error(error: String) -> Self {
        Self {
            error: "Internal Server Error".to_string(),
            message: error,
            status_code: 500,
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GatewayError: {}", self.message)
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // log only server errors
        if self.status_code >= 500 {
            error!("Error occurred: {} - {}", self.error, self.message);
        }

        let error_response = self.clone();

        (status_code, Json(error_response)).into_response()
    }
}

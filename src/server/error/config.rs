use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration read from the environment is unusable.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `DATABASE_URL` is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// `BIND_ADDRESS` is not a socket address or `LOG_LEVEL` is not a tracing level.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}

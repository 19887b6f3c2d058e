use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PaginationError {
    /// A query parameter is not a positive integer.
    #[error("The '{param}' parameter must be a positive integer, got {value:?}")]
    InvalidParameter { param: &'static str, value: String },
}

impl IntoResponse for PaginationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}

//! Error types for the server application.
//!
//! This module provides the error handling system with specialized error types for each
//! failure domain (configuration, validation, lifecycle conflicts, pagination). All errors
//! implement `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic error
//! definitions with automatic `Display` and `Error` trait implementations.

pub mod config;
pub mod conflict;
pub mod pagination;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{
        error::{
            config::ConfigError, conflict::ConflictError, pagination::PaginationError,
            validation::ValidationError,
        },
        model::kind::EntityKind,
    },
};

/// Main error type for the server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Validation errors (field-keyed rule violations, never accompanied by a write)
/// - Conflict errors (lifecycle guards such as deactivating an inactive record)
/// - Pagination errors (malformed `page`/`offset` query parameters)
/// - Lookups of records that do not exist
/// - External library errors (database, IO, request body and path parsing)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// One or more fields of a candidate record broke a validation rule.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// A lifecycle transition is not allowed in the record's current state.
    #[error(transparent)]
    ConflictError(#[from] ConflictError),
    /// Invalid pagination query parameters.
    #[error(transparent)]
    PaginationError(#[from] PaginationError),
    /// No record of the given kind exists with the requested identifier.
    #[error("{kind} {id} not found")]
    NotFound {
        /// Kind of record that was looked up
        kind: EntityKind,
        /// Identifier that did not resolve
        id: i32,
    },
    /// No record of the given kind exists with the requested name.
    #[error("{kind} named {name:?} not found")]
    NameNotFound {
        /// Kind of record that was looked up
        kind: EntityKind,
        /// Name that did not resolve
        name: String,
    },
    /// Request body could not be deserialized.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
    /// A path parameter could not be parsed, e.g. a non-numeric id.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),
    /// Internal error indicating a bug in the application's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error responses.
/// Unexpected errors are treated as internal server errors (500) with logging.
///
/// # Returns
/// - 400 Bad Request - Validation, conflict, pagination and request body errors
/// - 404 Not Found - Records that do not exist
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::ConflictError(err) => err.into_response(),
            Self::PaginationError(err) => err.into_response(),
            Self::NotFound { .. } | Self::NameNotFound { .. } => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, self.to_string())
            }
            Self::JsonRejection(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection);

                error_response(StatusCode::BAD_REQUEST, rejection.body_text())
            }
            Self::PathRejection(rejection) => {
                tracing::debug!("Rejected path parameter: {}", rejection);

                error_response(StatusCode::BAD_REQUEST, rejection.body_text())
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds an error envelope without field-keyed data.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            message: message.into(),
            data: None,
            status: status.as_u16(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::{error::error_response, model::kind::EntityKind};

/// A requested lifecycle transition is not allowed for the record's current state.
///
/// Duplicate names are not reported here. They surface as a field-keyed
/// [`ValidationError`](super::validation::ValidationError) on `name`, both from the
/// pre-check and from a unique index violation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConflictError {
    #[error("{kind} {id} is already inactive")]
    AlreadyInactive { kind: EntityKind, id: i32 },
    /// Other records still reference the record being deactivated.
    #[error(
        "{kind} {id} cannot be deactivated because it is referenced by one or more {}",
        .dependents.plural()
    )]
    HasDependents {
        kind: EntityKind,
        id: i32,
        dependents: EntityKind,
    },
    #[error("Match {0} cannot be deleted because it has already been uploaded")]
    MatchLocked(i32),
}

impl IntoResponse for ConflictError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::kind::EntityKind};

/// Field-keyed set of rule violations for a candidate record.
///
/// Rules add their messages under the field they concern, so a single request can report
/// every rejected field at once. A candidate is only persisted if the set is empty.
#[derive(Error, Debug, Default, Clone, PartialEq, Eq)]
#[error("Validation failed for fields: {}", .fields.keys().cloned().collect::<Vec<_>>().join(", "))]
pub struct ValidationError {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an error set holding a single message.
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Records a message under `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Messages recorded for `field`, empty if the field passed.
    pub fn messages(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn fields(&self) -> &BTreeMap<String, Vec<String>> {
        &self.fields
    }

    /// Returns `Err(self)` if any rule failed.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Error reported when `name` is already used by another record of `kind`.
    pub fn duplicate_name(kind: EntityKind) -> Self {
        Self::single("name", duplicate_name_message(kind))
    }
}

pub fn duplicate_name_message(kind: EntityKind) -> String {
    format!("{} with this name already exists.", kind)
}

/// Translates a unique constraint violation raised by the database into the same
/// duplicate-name error the pre-insert check produces.
///
/// The existence check runs before every insert, but two concurrent requests can both pass
/// it; the unique index on the name column rejects the second one and this maps it back
/// into a validation error. Any other database error is passed through unchanged.
pub fn map_unique_violation(err: DbErr, kind: EntityKind) -> super::Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!(kind = %kind, "Unique constraint violation: {}", detail);

            ValidationError::duplicate_name(kind).into()
        }
        _ => err.into(),
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = StatusCode::BAD_REQUEST;

        (
            status,
            Json(ErrorDto {
                message: "Validation errors".to_string(),
                data: Some(self.fields),
                status: status.as_u16(),
            }),
        )
            .into_response()
    }
}

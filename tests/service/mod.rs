//! Tests for the record services.
//!
//! Each service runs against an in-memory SQLite database created by `TestBuilder`, so
//! the consistency queries, validation and writes are exercised together.

mod season;
mod team;
mod tournament;
mod tournament_match;

use torneo::server::{error::Error, model::kind::EntityKind};
use torneo_test_utils::prelude::*;

/// Messages reported for `field` by a validation failure, empty for any other error.
fn field_messages(err: &Error, field: &str) -> Vec<String> {
    match err {
        Error::ValidationError(errors) => errors.messages(field).to_vec(),
        _ => Vec::new(),
    }
}

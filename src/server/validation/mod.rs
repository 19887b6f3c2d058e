//! Rule evaluation for candidate records.
//!
//! Each submodule takes a *draft* (the submitted values, merged with the stored record on
//! update) and a *lookup* holding the answers to the consistency queries the rules depend
//! on, and returns either a fully-populated `Valid*` value ready to persist or a
//! [`ValidationError`] listing every rejected field. Nothing here touches the database.
//!
//! Per-field rules accumulate. Cross-field rules (date ranges, schedule collisions) only run
//! once the fields they read have passed, and stop at the first failure.

pub mod institution;
pub mod season;
pub mod team;
pub mod tournament;
pub mod tournament_match;

use chrono::NaiveDateTime;

use crate::server::{error::validation::ValidationError, model::kind::EntityKind};

/// Longest accepted value for name and description columns.
pub const MAX_TEXT_LENGTH: usize = 250;

pub const REQUIRED: &str = "This field is required.";
pub const BLANK: &str = "This field may not be blank.";

/// Inclusive range between two timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDateTime) -> bool {
        self.start <= date && date <= self.end
    }
}

/// The name that would be stored for a draft, used to run the exists-by-name query.
///
/// Returns `None` when the name is missing or blank, as it fails validation regardless.
pub fn candidate_name(name: Option<&str>) -> Option<&str> {
    name.map(str::trim).filter(|name| !name.is_empty())
}

/// Returns the value if present, otherwise records a "required" error.
fn require<T>(errors: &mut ValidationError, field: &str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        errors.add(field, REQUIRED);
    }

    value
}

/// Checks a required text column, returning the trimmed value if it is acceptable.
fn require_text(errors: &mut ValidationError, field: &str, value: Option<&str>) -> Option<String> {
    let value = require(errors, field, value)?.trim();

    if value.is_empty() {
        errors.add(field, BLANK);
        return None;
    }

    if value.chars().count() > MAX_TEXT_LENGTH {
        errors.add(
            field,
            format!(
                "Ensure this field has no more than {} characters.",
                MAX_TEXT_LENGTH
            ),
        );
        return None;
    }

    Some(value.to_string())
}

/// Checks a name column, including its uniqueness among records of `kind`.
///
/// `name_taken` is the answer of the exists-by-name query, already excluding the record
/// being updated.
fn require_unique_name(
    errors: &mut ValidationError,
    kind: EntityKind,
    name: Option<&str>,
    name_taken: bool,
) -> Option<String> {
    let name = require_text(errors, "name", name)?;

    if name_taken {
        errors.add(
            "name",
            crate::server::error::validation::duplicate_name_message(kind),
        );
        return None;
    }

    Some(name)
}

/// Records a "does not exist" error for a reference that did not resolve.
fn require_reference(
    errors: &mut ValidationError,
    field: &str,
    kind: EntityKind,
    id: Option<i32>,
    resolved: bool,
) -> Option<i32> {
    let id = require(errors, field, id)?;

    if !resolved {
        errors.add(field, format!("{} {} does not exist.", kind, id));
        return None;
    }

    Some(id)
}

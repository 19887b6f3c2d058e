use chrono::NaiveDateTime;

use crate::{
    model::season::SeasonKind,
    server::{error::validation::ValidationError, model::kind::EntityKind},
};

use super::{require, require_text, require_unique_name};

/// Candidate values for a season.
#[derive(Debug, Default, Clone)]
pub struct SeasonDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub kind: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

/// Consistency query answers for a season draft.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeasonLookup {
    /// Another season already uses the draft's name
    pub name_taken: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSeason {
    pub name: String,
    pub description: String,
    pub kind: SeasonKind,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
}

pub fn validate_season(
    draft: &SeasonDraft,
    lookup: &SeasonLookup,
) -> Result<ValidSeason, ValidationError> {
    let mut errors = ValidationError::new();

    let name = require_unique_name(
        &mut errors,
        EntityKind::Season,
        draft.name.as_deref(),
        lookup.name_taken,
    );
    let description = require_text(&mut errors, "description", draft.description.as_deref());
    let kind = require(&mut errors, "kind", draft.kind.as_deref()).and_then(|kind| {
        match kind.parse::<SeasonKind>() {
            Ok(kind) => Some(kind),
            Err(value) => {
                errors.add("kind", format!("\"{}\" is not a valid choice.", value));
                None
            }
        }
    });
    let start_date = require(&mut errors, "start_date", draft.start_date);
    let end_date = require(&mut errors, "end_date", draft.end_date);

    if let (Some(start_date), Some(end_date)) = (start_date, end_date) {
        if start_date > end_date {
            errors.add(
                "end_date",
                "The end date cannot be earlier than the start date.",
            );
        }
    }

    match (name, description, kind, start_date, end_date) {
        (Some(name), Some(description), Some(kind), Some(start_date), Some(end_date))
            if errors.is_empty() =>
        {
            Ok(ValidSeason {
                name,
                description,
                kind,
                start_date,
                end_date,
            })
        }
        _ => Err(errors),
    }
}

use chrono::NaiveDateTime;

use crate::server::{error::validation::ValidationError, model::kind::EntityKind};

use super::{require, require_reference, require_text, require_unique_name, DateRange};

/// Candidate values for a tournament.
#[derive(Debug, Default, Clone)]
pub struct TournamentDraft {
    pub season_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

/// Consistency query answers for a tournament draft.
#[derive(Debug, Default, Clone, Copy)]
pub struct TournamentLookup {
    /// Date range of the referenced season, `None` if it does not exist
    pub season: Option<DateRange>,
    /// Another tournament already uses the draft's name
    pub name_taken: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTournament {
    pub season_id: i32,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
}

pub fn validate_tournament(
    draft: &TournamentDraft,
    lookup: &TournamentLookup,
) -> Result<ValidTournament, ValidationError> {
    let mut errors = ValidationError::new();

    let season_id = require_reference(
        &mut errors,
        "season_id",
        EntityKind::Season,
        draft.season_id,
        lookup.season.is_some(),
    );
    let name = require_unique_name(
        &mut errors,
        EntityKind::Tournament,
        draft.name.as_deref(),
        lookup.name_taken,
    );
    let description = require_text(&mut errors, "description", draft.description.as_deref());
    let start_date = require(&mut errors, "start_date", draft.start_date);
    let end_date = require(&mut errors, "end_date", draft.end_date);

    if let (Some(season), Some(start_date), Some(end_date)) = (lookup.season, start_date, end_date)
    {
        check_within_season(&mut errors, season, start_date, end_date);
    }

    match (season_id, name, description, start_date, end_date) {
        (Some(season_id), Some(name), Some(description), Some(start_date), Some(end_date))
            if errors.is_empty() =>
        {
            Ok(ValidTournament {
                season_id,
                name,
                description,
                start_date,
                end_date,
            })
        }
        _ => Err(errors),
    }
}

/// Stops at the first violated bound.
fn check_within_season(
    errors: &mut ValidationError,
    season: DateRange,
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
) {
    if !season.contains(start_date) {
        errors.add(
            "start_date",
            "The start date must be within the season's date range.",
        );
    } else if !season.contains(end_date) {
        errors.add(
            "end_date",
            "The end date must be within the season's date range.",
        );
    } else if start_date > end_date {
        errors.add(
            "start_date",
            "The start date cannot be later than the end date.",
        );
    }
}

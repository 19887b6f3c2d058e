use chrono::NaiveDateTime;

use crate::server::{error::validation::ValidationError, model::kind::EntityKind};

use super::{require, require_reference, DateRange};

pub const MISSING_TEAMS: &str = "At least one team (local or visitor) must be specified.";
pub const SAME_TEAM: &str = "A team cannot play against itself.";
pub const OUTSIDE_TOURNAMENT: &str = "The match date must be within the tournament's date range.";
pub const SCHEDULE_CONFLICT: &str =
    "A team cannot have more than one match at the same date and time.";

/// Candidate values for a match.
#[derive(Debug, Default, Clone)]
pub struct MatchDraft {
    pub date: Option<NaiveDateTime>,
    pub local_score: Option<i32>,
    pub visitor_score: Option<i32>,
    pub uploaded: bool,
    pub local_team_id: Option<i32>,
    pub visitor_team_id: Option<i32>,
    pub tournament_id: Option<i32>,
    pub season_id: Option<i32>,
}

impl MatchDraft {
    /// Teams taking part in the match, used for the schedule conflict search.
    pub fn team_ids(&self) -> Vec<i32> {
        self.local_team_id
            .into_iter()
            .chain(self.visitor_team_id)
            .collect()
    }
}

/// Consistency query answers for a match draft.
#[derive(Debug, Default, Clone)]
pub struct MatchLookup {
    pub local_team_exists: bool,
    pub visitor_team_exists: bool,
    pub tournament_exists: bool,
    pub season_exists: bool,
    /// Range the match date must fall in, `None` skips the check
    pub tournament_range: Option<DateRange>,
    /// Ids of other matches at the same instant sharing a team with the draft
    pub conflicting_match_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidMatch {
    pub date: NaiveDateTime,
    pub local_score: Option<i32>,
    pub visitor_score: Option<i32>,
    pub uploaded: bool,
    pub local_team_id: i32,
    pub visitor_team_id: i32,
    pub tournament_id: i32,
    pub season_id: i32,
}

pub fn validate_match(
    draft: &MatchDraft,
    lookup: &MatchLookup,
) -> Result<ValidMatch, ValidationError> {
    let mut errors = ValidationError::new();

    let date = require(&mut errors, "date", draft.date);
    let tournament_id = require_reference(
        &mut errors,
        "tournament_id",
        EntityKind::Tournament,
        draft.tournament_id,
        lookup.tournament_exists,
    );
    let season_id = require_reference(
        &mut errors,
        "season_id",
        EntityKind::Season,
        draft.season_id,
        lookup.season_exists,
    );

    let (local_team_id, visitor_team_id) = match (draft.local_team_id, draft.visitor_team_id) {
        (None, None) => {
            errors.add("teams", MISSING_TEAMS);
            (None, None)
        }
        (local, visitor) => (
            require_reference(
                &mut errors,
                "local_team_id",
                EntityKind::Team,
                local,
                lookup.local_team_exists,
            ),
            require_reference(
                &mut errors,
                "visitor_team_id",
                EntityKind::Team,
                visitor,
                lookup.visitor_team_exists,
            ),
        ),
    };

    check_schedule(&mut errors, draft, lookup);

    match (date, local_team_id, visitor_team_id, tournament_id, season_id) {
        (
            Some(date),
            Some(local_team_id),
            Some(visitor_team_id),
            Some(tournament_id),
            Some(season_id),
        ) if errors.is_empty() => Ok(ValidMatch {
            date,
            local_score: draft.local_score,
            visitor_score: draft.visitor_score,
            uploaded: draft.uploaded,
            local_team_id,
            visitor_team_id,
            tournament_id,
            season_id,
        }),
        _ => Err(errors),
    }
}

/// Cross-field rules, stopping at the first violation.
fn check_schedule(errors: &mut ValidationError, draft: &MatchDraft, lookup: &MatchLookup) {
    if let (Some(local), Some(visitor)) = (draft.local_team_id, draft.visitor_team_id) {
        if local == visitor {
            errors.add("visitor_team_id", SAME_TEAM);
            return;
        }
    }

    let (Some(range), Some(date)) = (lookup.tournament_range, draft.date) else {
        return;
    };

    if !range.contains(date) {
        errors.add("date", OUTSIDE_TOURNAMENT);
        return;
    }

    if !lookup.conflicting_match_ids.is_empty() {
        errors.add("date", SCHEDULE_CONFLICT);
    }
}

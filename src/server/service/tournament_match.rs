use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::PageDto,
        tournament_match::{CreateMatchDto, MatchDto, UpdateMatchDto},
    },
    server::{
        data::{
            season::SeasonRepository,
            team::TeamRepository,
            tournament::TournamentRepository,
            tournament_match::{MatchNames, MatchRepository},
        },
        error::Error,
        model::{
            db::MatchModel, kind::EntityKind, lifecycle::LockState, pagination::Pagination,
        },
        validation::{
            tournament_match::{validate_match, MatchDraft, MatchLookup},
            DateRange,
        },
    },
};

/// Service for managing matches.
///
/// Matches are the only records that are physically deleted, guarded by their `uploaded`
/// lock rather than by dependents.
pub struct MatchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules a match.
    ///
    /// The date is checked against the range of the tournament referenced by the payload.
    ///
    /// # Returns
    /// - `Ok(MatchDto)` - The stored match
    /// - `Err(Error::ValidationError)` - Unresolved references, a team playing itself, a date
    ///   outside the tournament or a team already playing at that instant
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, dto: CreateMatchDto) -> Result<MatchDto, Error> {
        let txn = self.db.begin().await?;

        let draft = MatchDraft {
            date: dto.date,
            local_score: dto.local_score,
            visitor_score: dto.visitor_score,
            uploaded: dto.uploaded.unwrap_or(false),
            local_team_id: dto.local_team_id,
            visitor_team_id: dto.visitor_team_id,
            tournament_id: dto.tournament_id,
            season_id: dto.season_id,
        };
        let lookup = match_lookup(&txn, &draft, draft.tournament_id, None).await?;
        let valid = validate_match(&draft, &lookup)?;

        let repo = MatchRepository::new(&txn);
        let tournament_match = repo.create(valid).await?;
        let names = repo
            .get_related_names(std::slice::from_ref(&tournament_match))
            .await?;
        txn.commit().await?;

        tracing::info!("Created match {}", tournament_match.id);

        Ok(match_dto(tournament_match, &names))
    }

    pub async fn get(&self, id: i32) -> Result<MatchDto, Error> {
        let repo = MatchRepository::new(self.db);

        let tournament_match = repo.get_by_id(id).await?.ok_or(Error::NotFound {
            kind: EntityKind::Match,
            id,
        })?;
        let names = repo
            .get_related_names(std::slice::from_ref(&tournament_match))
            .await?;

        Ok(match_dto(tournament_match, &names))
    }

    pub async fn list(&self, pagination: Pagination) -> Result<PageDto<MatchDto>, Error> {
        let repo = MatchRepository::new(self.db);

        let (matches, count) = repo.get_page(pagination).await?;
        let names = repo.get_related_names(&matches).await?;

        Ok(pagination.into_page(
            count,
            matches
                .into_iter()
                .map(|tournament_match| match_dto(tournament_match, &names))
                .collect(),
        ))
    }

    /// Applies a partial update, keeping stored values for omitted fields.
    ///
    /// The date is checked against the tournament the match was stored with, even when the
    /// payload moves it to another tournament. `uploaded` may be toggled either way.
    pub async fn update(&self, id: i32, dto: UpdateMatchDto) -> Result<MatchDto, Error> {
        let txn = self.db.begin().await?;
        let repo = MatchRepository::new(&txn);

        let existing = repo.get_by_id(id).await?.ok_or(Error::NotFound {
            kind: EntityKind::Match,
            id,
        })?;

        let draft = MatchDraft {
            date: dto.date.or(Some(existing.date)),
            local_score: dto.local_score.or(existing.local_score),
            visitor_score: dto.visitor_score.or(existing.visitor_score),
            uploaded: dto.uploaded.unwrap_or(existing.uploaded),
            local_team_id: dto.local_team_id.or(Some(existing.local_team_id)),
            visitor_team_id: dto.visitor_team_id.or(Some(existing.visitor_team_id)),
            tournament_id: dto.tournament_id.or(Some(existing.tournament_id)),
            season_id: dto.season_id.or(Some(existing.season_id)),
        };
        let lookup = match_lookup(&txn, &draft, Some(existing.tournament_id), Some(id)).await?;
        let valid = validate_match(&draft, &lookup)?;

        let tournament_match = repo.update(existing, valid).await?;
        let names = repo
            .get_related_names(std::slice::from_ref(&tournament_match))
            .await?;
        txn.commit().await?;

        tracing::info!("Updated match {}", id);

        Ok(match_dto(tournament_match, &names))
    }

    /// Physically deletes an unlocked match.
    ///
    /// # Returns
    /// - `Ok(MatchDto)` - The match as it was before deletion
    /// - `Err(Error::NotFound)` - No match with this id
    /// - `Err(Error::ConflictError)` - The match is uploaded
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete(&self, id: i32) -> Result<MatchDto, Error> {
        let txn = self.db.begin().await?;
        let repo = MatchRepository::new(&txn);

        let existing = repo.get_by_id(id).await?.ok_or(Error::NotFound {
            kind: EntityKind::Match,
            id,
        })?;

        LockState::from(existing.uploaded).authorize_deletion(id)?;

        let names = repo.get_related_names(std::slice::from_ref(&existing)).await?;
        repo.delete(id).await?;
        txn.commit().await?;

        tracing::info!("Deleted match {}", id);

        Ok(match_dto(existing, &names))
    }
}

/// Runs the consistency queries a match draft is validated against.
///
/// # Arguments
/// - `range_tournament_id` - Tournament whose range the date must fall in
/// - `exclude_id` - Match being updated, ignored by the conflict search
async fn match_lookup<C: ConnectionTrait>(
    db: &C,
    draft: &MatchDraft,
    range_tournament_id: Option<i32>,
    exclude_id: Option<i32>,
) -> Result<MatchLookup, Error> {
    let team_repo = TeamRepository::new(db);
    let tournament_repo = TournamentRepository::new(db);

    let local_team_exists = match draft.local_team_id {
        Some(team_id) => team_repo.get_by_id(team_id).await?.is_some(),
        None => false,
    };
    let visitor_team_exists = match draft.visitor_team_id {
        Some(team_id) => team_repo.get_by_id(team_id).await?.is_some(),
        None => false,
    };
    let tournament_exists = match draft.tournament_id {
        Some(tournament_id) => tournament_repo.get_by_id(tournament_id).await?.is_some(),
        None => false,
    };
    let season_exists = match draft.season_id {
        Some(season_id) => SeasonRepository::new(db)
            .get_by_id(season_id)
            .await?
            .is_some(),
        None => false,
    };

    let tournament_range = match range_tournament_id {
        Some(tournament_id) => tournament_repo
            .get_by_id(tournament_id)
            .await?
            .map(|tournament| DateRange::new(tournament.start_date, tournament.end_date)),
        None => None,
    };

    let conflicting_match_ids = match draft.date {
        Some(date) => MatchRepository::new(db)
            .find_schedule_conflicts(date, &draft.team_ids(), exclude_id)
            .await?
            .into_iter()
            .map(|conflict| conflict.id)
            .collect(),
        None => Vec::new(),
    };

    Ok(MatchLookup {
        local_team_exists,
        visitor_team_exists,
        tournament_exists,
        season_exists,
        tournament_range,
        conflicting_match_ids,
    })
}

fn match_dto(tournament_match: MatchModel, names: &MatchNames) -> MatchDto {
    MatchDto {
        id: tournament_match.id,
        date: tournament_match.date,
        local_score: tournament_match.local_score,
        visitor_score: tournament_match.visitor_score,
        uploaded: tournament_match.uploaded,
        local_team_id: tournament_match.local_team_id,
        local_team_name: names.teams.get(&tournament_match.local_team_id).cloned(),
        visitor_team_id: tournament_match.visitor_team_id,
        visitor_team_name: names.teams.get(&tournament_match.visitor_team_id).cloned(),
        tournament_id: tournament_match.tournament_id,
        tournament_name: names.tournaments.get(&tournament_match.tournament_id).cloned(),
        season_id: tournament_match.season_id,
        season_name: names.seasons.get(&tournament_match.season_id).cloned(),
    }
}

use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::PageDto,
        tournament::{CreateTournamentDto, TournamentDto, UpdateTournamentDto},
    },
    server::{
        data::{season::SeasonRepository, tournament::TournamentRepository},
        error::{validation::map_unique_violation, Error},
        model::{
            db::{SeasonModel, TournamentModel},
            kind::EntityKind,
            lifecycle::ActivityState,
            pagination::Pagination,
        },
        service::lifecycle::LifecycleGuard,
        validation::{
            candidate_name,
            tournament::{validate_tournament, TournamentDraft, TournamentLookup},
            DateRange,
        },
    },
};

/// Service for managing tournaments.
pub struct TournamentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TournamentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a tournament inside an existing season, inactive unless the payload sets `active`.
    ///
    /// # Returns
    /// - `Ok(TournamentDto)` - The stored tournament with its season name
    /// - `Err(Error::ValidationError)` - Unknown season, range outside the season, taken name
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, dto: CreateTournamentDto) -> Result<TournamentDto, Error> {
        let txn = self.db.begin().await?;
        let repo = TournamentRepository::new(&txn);

        let draft = TournamentDraft {
            season_id: dto.season_id,
            name: dto.name,
            description: dto.description,
            start_date: dto.start_date,
            end_date: dto.end_date,
        };
        let season = resolve_season(&txn, draft.season_id).await?;
        let lookup = TournamentLookup {
            season: season
                .as_ref()
                .map(|season| DateRange::new(season.start_date, season.end_date)),
            name_taken: match candidate_name(draft.name.as_deref()) {
                Some(name) => repo.exists_by_name(name, None).await?,
                None => false,
            },
        };
        let valid = validate_tournament(&draft, &lookup)?;

        let tournament = repo
            .create(valid, dto.active.unwrap_or(false))
            .await
            .map_err(|err| map_unique_violation(err, EntityKind::Tournament))?;
        txn.commit().await?;

        tracing::info!("Created tournament {}", tournament.id);

        Ok(tournament_dto(tournament, season))
    }

    pub async fn get(&self, id: i32) -> Result<TournamentDto, Error> {
        let (tournament, season) = TournamentRepository::new(self.db)
            .get_with_season(id)
            .await?
            .ok_or(Error::NotFound {
                kind: EntityKind::Tournament,
                id,
            })?;

        Ok(tournament_dto(tournament, season))
    }

    pub async fn list(&self, pagination: Pagination) -> Result<PageDto<TournamentDto>, Error> {
        let (tournaments, count) = TournamentRepository::new(self.db)
            .get_page(pagination)
            .await?;

        Ok(pagination.into_page(
            count,
            tournaments
                .into_iter()
                .map(|(tournament, season)| tournament_dto(tournament, season))
                .collect(),
        ))
    }

    /// Applies a partial update, keeping stored values for omitted fields.
    ///
    /// The merged range is checked against the merged season, so moving a tournament to
    /// another season re-checks its dates. Matches already scheduled are not re-checked.
    pub async fn update(&self, id: i32, dto: UpdateTournamentDto) -> Result<TournamentDto, Error> {
        let txn = self.db.begin().await?;
        let repo = TournamentRepository::new(&txn);

        let existing = repo.get_by_id(id).await?.ok_or(Error::NotFound {
            kind: EntityKind::Tournament,
            id,
        })?;

        let draft = TournamentDraft {
            season_id: dto.season_id.or(Some(existing.season_id)),
            name: dto.name.or_else(|| Some(existing.name.clone())),
            description: dto
                .description
                .or_else(|| Some(existing.description.clone())),
            start_date: dto.start_date.or(Some(existing.start_date)),
            end_date: dto.end_date.or(Some(existing.end_date)),
        };
        let season = resolve_season(&txn, draft.season_id).await?;
        let lookup = TournamentLookup {
            season: season
                .as_ref()
                .map(|season| DateRange::new(season.start_date, season.end_date)),
            name_taken: match candidate_name(draft.name.as_deref()) {
                Some(name) => repo.exists_by_name(name, Some(id)).await?,
                None => false,
            },
        };
        let valid = validate_tournament(&draft, &lookup)?;

        let tournament = repo
            .update(existing, valid)
            .await
            .map_err(|err| map_unique_violation(err, EntityKind::Tournament))?;
        txn.commit().await?;

        tracing::info!("Updated tournament {}", id);

        Ok(tournament_dto(tournament, season))
    }

    /// Marks the tournament inactive unless a match still references it.
    pub async fn deactivate(&self, id: i32) -> Result<TournamentDto, Error> {
        let txn = self.db.begin().await?;
        let repo = TournamentRepository::new(&txn);

        let (existing, season) = repo.get_with_season(id).await?.ok_or(Error::NotFound {
            kind: EntityKind::Tournament,
            id,
        })?;

        LifecycleGuard::new(&txn)
            .authorize_deactivation(
                EntityKind::Tournament,
                id,
                ActivityState::from(existing.active),
            )
            .await?;

        let tournament = repo.set_inactive(existing).await?;
        txn.commit().await?;

        tracing::info!("Deactivated tournament {}", id);

        Ok(tournament_dto(tournament, season))
    }
}

async fn resolve_season<C: ConnectionTrait>(
    db: &C,
    season_id: Option<i32>,
) -> Result<Option<SeasonModel>, Error> {
    match season_id {
        Some(season_id) => Ok(SeasonRepository::new(db).get_by_id(season_id).await?),
        None => Ok(None),
    }
}

fn tournament_dto(tournament: TournamentModel, season: Option<SeasonModel>) -> TournamentDto {
    TournamentDto {
        id: tournament.id,
        season_id: tournament.season_id,
        season_name: season.map(|season| season.name),
        name: tournament.name,
        description: tournament.description,
        start_date: tournament.start_date,
        end_date: tournament.end_date,
        active: tournament.active,
    }
}

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::PageDto,
        season::{CreateSeasonDto, SeasonDto, UpdateSeasonDto},
    },
    server::{
        data::season::SeasonRepository,
        error::{validation::map_unique_violation, Error},
        model::{db::SeasonModel, kind::EntityKind, lifecycle::ActivityState, pagination::Pagination},
        service::lifecycle::LifecycleGuard,
        validation::{
            candidate_name,
            season::{validate_season, SeasonDraft, SeasonLookup},
        },
    },
};

/// Service for managing seasons.
pub struct SeasonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeasonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a season, inactive unless the payload sets `active`.
    ///
    /// # Returns
    /// - `Ok(SeasonDto)` - The stored season
    /// - `Err(Error::ValidationError)` - Missing fields, unknown kind, inverted range or taken name
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, dto: CreateSeasonDto) -> Result<SeasonDto, Error> {
        let txn = self.db.begin().await?;
        let repo = SeasonRepository::new(&txn);

        let draft = SeasonDraft {
            name: dto.name,
            description: dto.description,
            kind: dto.kind,
            start_date: dto.start_date,
            end_date: dto.end_date,
        };
        let lookup = SeasonLookup {
            name_taken: match candidate_name(draft.name.as_deref()) {
                Some(name) => repo.exists_by_name(name, None).await?,
                None => false,
            },
        };
        let valid = validate_season(&draft, &lookup)?;

        let season = repo
            .create(valid, dto.active.unwrap_or(false))
            .await
            .map_err(|err| map_unique_violation(err, EntityKind::Season))?;
        txn.commit().await?;

        tracing::info!("Created season {}", season.id);

        Ok(season_dto(season))
    }

    pub async fn get(&self, id: i32) -> Result<SeasonDto, Error> {
        let season = SeasonRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::NotFound {
                kind: EntityKind::Season,
                id,
            })?;

        Ok(season_dto(season))
    }

    pub async fn list(&self, pagination: Pagination) -> Result<PageDto<SeasonDto>, Error> {
        let (seasons, count) = SeasonRepository::new(self.db).get_page(pagination).await?;

        Ok(pagination.into_page(count, seasons.into_iter().map(season_dto).collect()))
    }

    /// Applies a partial update, keeping stored values for omitted fields.
    ///
    /// Tournaments already inside the season are not re-checked against a narrowed range.
    pub async fn update(&self, id: i32, dto: UpdateSeasonDto) -> Result<SeasonDto, Error> {
        let txn = self.db.begin().await?;
        let repo = SeasonRepository::new(&txn);

        let existing = repo.get_by_id(id).await?.ok_or(Error::NotFound {
            kind: EntityKind::Season,
            id,
        })?;

        let draft = SeasonDraft {
            name: dto.name.or_else(|| Some(existing.name.clone())),
            description: dto.description.or_else(|| Some(existing.description.clone())),
            kind: dto.kind.or_else(|| Some(existing.kind.clone())),
            start_date: dto.start_date.or(Some(existing.start_date)),
            end_date: dto.end_date.or(Some(existing.end_date)),
        };
        let lookup = SeasonLookup {
            name_taken: match candidate_name(draft.name.as_deref()) {
                Some(name) => repo.exists_by_name(name, Some(id)).await?,
                None => false,
            },
        };
        let valid = validate_season(&draft, &lookup)?;

        let season = repo
            .update(existing, valid)
            .await
            .map_err(|err| map_unique_violation(err, EntityKind::Season))?;
        txn.commit().await?;

        tracing::info!("Updated season {}", id);

        Ok(season_dto(season))
    }

    /// Marks the season inactive unless a tournament or match still references it.
    pub async fn deactivate(&self, id: i32) -> Result<SeasonDto, Error> {
        let txn = self.db.begin().await?;
        let repo = SeasonRepository::new(&txn);

        let existing = repo.get_by_id(id).await?.ok_or(Error::NotFound {
            kind: EntityKind::Season,
            id,
        })?;

        LifecycleGuard::new(&txn)
            .authorize_deactivation(EntityKind::Season, id, ActivityState::from(existing.active))
            .await?;

        let season = repo.set_inactive(existing).await?;
        txn.commit().await?;

        tracing::info!("Deactivated season {}", id);

        Ok(season_dto(season))
    }
}

fn season_dto(season: SeasonModel) -> SeasonDto {
    SeasonDto {
        id: season.id,
        name: season.name,
        description: season.description,
        kind: season.kind,
        start_date: season.start_date,
        end_date: season.end_date,
        active: season.active,
    }
}

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::PageDto,
        team::{CreateTeamDto, TeamDto, UpdateTeamDto},
    },
    server::{
        data::{institution::InstitutionRepository, team::TeamRepository},
        error::{validation::map_unique_violation, Error},
        model::{
            db::{InstitutionModel, TeamModel},
            kind::EntityKind,
            lifecycle::ActivityState,
            pagination::Pagination,
        },
        service::lifecycle::LifecycleGuard,
        util::image::encode_data_uri,
        validation::{
            candidate_name,
            team::{validate_team, TeamDraft, TeamLookup},
        },
    },
};

/// Service for managing teams.
pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active team owned by an existing institution.
    ///
    /// # Returns
    /// - `Ok(TeamDto)` - The stored team with its institution name
    /// - `Err(Error::ValidationError)` - Name invalid or taken, unknown institution or bad image
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, dto: CreateTeamDto) -> Result<TeamDto, Error> {
        let txn = self.db.begin().await?;
        let team_repo = TeamRepository::new(&txn);
        let institution_repo = InstitutionRepository::new(&txn);

        let draft = TeamDraft {
            institution_id: dto.institution_id,
            name: dto.name,
            image: dto.image,
            current_image: None,
        };

        let institution = match draft.institution_id {
            Some(institution_id) => institution_repo.get_by_id(institution_id).await?,
            None => None,
        };
        let lookup = TeamLookup {
            institution_exists: institution.is_some(),
            name_taken: match candidate_name(draft.name.as_deref()) {
                Some(name) => team_repo.exists_by_name(name, None).await?,
                None => false,
            },
        };
        let valid = validate_team(draft, &lookup)?;

        let team = team_repo
            .create(valid)
            .await
            .map_err(|err| map_unique_violation(err, EntityKind::Team))?;
        txn.commit().await?;

        tracing::info!("Created team {}", team.id);

        Ok(team_dto(team, institution))
    }

    pub async fn get(&self, id: i32) -> Result<TeamDto, Error> {
        let (team, institution) = TeamRepository::new(self.db)
            .get_with_institution(id)
            .await?
            .ok_or(Error::NotFound {
                kind: EntityKind::Team,
                id,
            })?;

        Ok(team_dto(team, institution))
    }

    /// Finds a team by its exact, case-sensitive name.
    pub async fn search_by_name(&self, name: &str) -> Result<TeamDto, Error> {
        let (team, institution) = TeamRepository::new(self.db)
            .get_by_name(name)
            .await?
            .ok_or_else(|| Error::NameNotFound {
                kind: EntityKind::Team,
                name: name.to_string(),
            })?;

        Ok(team_dto(team, institution))
    }

    pub async fn list(&self, pagination: Pagination) -> Result<PageDto<TeamDto>, Error> {
        let (teams, count) = TeamRepository::new(self.db).get_page(pagination).await?;

        Ok(pagination.into_page(
            count,
            teams
                .into_iter()
                .map(|(team, institution)| team_dto(team, institution))
                .collect(),
        ))
    }

    /// Applies a partial update, keeping stored values for omitted fields.
    ///
    /// An omitted image keeps the stored one, an empty string removes it.
    ///
    /// # Returns
    /// - `Ok(TeamDto)` - The updated team
    /// - `Err(Error::NotFound)` - No team with this id
    /// - `Err(Error::ValidationError)` - The merged values break a rule
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(&self, id: i32, dto: UpdateTeamDto) -> Result<TeamDto, Error> {
        let txn = self.db.begin().await?;
        let team_repo = TeamRepository::new(&txn);
        let institution_repo = InstitutionRepository::new(&txn);

        let existing = team_repo.get_by_id(id).await?.ok_or(Error::NotFound {
            kind: EntityKind::Team,
            id,
        })?;

        let draft = TeamDraft {
            institution_id: dto.institution_id.or(Some(existing.institution_id)),
            name: dto.name.or_else(|| Some(existing.name.clone())),
            image: dto.image,
            current_image: existing.image.clone(),
        };

        let institution = match draft.institution_id {
            Some(institution_id) => institution_repo.get_by_id(institution_id).await?,
            None => None,
        };
        let lookup = TeamLookup {
            institution_exists: institution.is_some(),
            name_taken: match candidate_name(draft.name.as_deref()) {
                Some(name) => team_repo.exists_by_name(name, Some(id)).await?,
                None => false,
            },
        };
        let valid = validate_team(draft, &lookup)?;

        let team = team_repo
            .update(existing, valid)
            .await
            .map_err(|err| map_unique_violation(err, EntityKind::Team))?;
        txn.commit().await?;

        tracing::info!("Updated team {}", id);

        Ok(team_dto(team, institution))
    }

    /// Marks the team inactive unless a match still references it.
    ///
    /// # Returns
    /// - `Ok(TeamDto)` - The team in its inactive state
    /// - `Err(Error::NotFound)` - No team with this id
    /// - `Err(Error::ConflictError)` - Already inactive, or playing in a match
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn deactivate(&self, id: i32) -> Result<TeamDto, Error> {
        let txn = self.db.begin().await?;
        let repo = TeamRepository::new(&txn);

        let (existing, institution) = repo.get_with_institution(id).await?.ok_or(Error::NotFound {
            kind: EntityKind::Team,
            id,
        })?;

        LifecycleGuard::new(&txn)
            .authorize_deactivation(EntityKind::Team, id, ActivityState::from(existing.active))
            .await?;

        let team = repo.set_inactive(existing).await?;
        txn.commit().await?;

        tracing::info!("Deactivated team {}", id);

        Ok(team_dto(team, institution))
    }
}

fn team_dto(team: TeamModel, institution: Option<InstitutionModel>) -> TeamDto {
    TeamDto {
        id: team.id,
        institution_id: team.institution_id,
        institution_name: institution.map(|institution| institution.name),
        name: team.name,
        image: team.image.as_deref().map(encode_data_uri),
        active: team.active,
    }
}

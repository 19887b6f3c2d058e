use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::PageDto,
        institution::{CreateInstitutionDto, InstitutionDto, UpdateInstitutionDto},
    },
    server::{
        data::institution::InstitutionRepository,
        error::{validation::map_unique_violation, Error},
        model::{
            db::InstitutionModel, kind::EntityKind, lifecycle::ActivityState,
            pagination::Pagination,
        },
        service::lifecycle::LifecycleGuard,
        validation::{
            candidate_name,
            institution::{validate_institution, InstitutionDraft, InstitutionLookup},
        },
    },
};

/// Service for managing institutions.
pub struct InstitutionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InstitutionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active institution after checking its name is unique.
    ///
    /// # Returns
    /// - `Ok(InstitutionDto)` - The stored institution
    /// - `Err(Error::ValidationError)` - Name missing, blank or already used
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, dto: CreateInstitutionDto) -> Result<InstitutionDto, Error> {
        let txn = self.db.begin().await?;
        let repo = InstitutionRepository::new(&txn);

        let draft = InstitutionDraft { name: dto.name };
        let lookup = InstitutionLookup {
            name_taken: match candidate_name(draft.name.as_deref()) {
                Some(name) => repo.exists_by_name(name, None).await?,
                None => false,
            },
        };
        let valid = validate_institution(&draft, &lookup)?;

        let institution = repo
            .create(valid)
            .await
            .map_err(|err| map_unique_violation(err, EntityKind::Institution))?;
        txn.commit().await?;

        tracing::info!("Created institution {}", institution.id);

        Ok(institution_dto(institution))
    }

    pub async fn get(&self, id: i32) -> Result<InstitutionDto, Error> {
        let institution = InstitutionRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::NotFound {
                kind: EntityKind::Institution,
                id,
            })?;

        Ok(institution_dto(institution))
    }

    pub async fn list(&self, pagination: Pagination) -> Result<PageDto<InstitutionDto>, Error> {
        let (institutions, count) = InstitutionRepository::new(self.db)
            .get_page(pagination)
            .await?;

        Ok(pagination.into_page(
            count,
            institutions.into_iter().map(institution_dto).collect(),
        ))
    }

    /// Applies a partial update, keeping stored values for omitted fields.
    ///
    /// # Returns
    /// - `Ok(InstitutionDto)` - The updated institution
    /// - `Err(Error::NotFound)` - No institution with this id
    /// - `Err(Error::ValidationError)` - The merged values break a rule
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(
        &self,
        id: i32,
        dto: UpdateInstitutionDto,
    ) -> Result<InstitutionDto, Error> {
        let txn = self.db.begin().await?;
        let repo = InstitutionRepository::new(&txn);

        let existing = repo.get_by_id(id).await?.ok_or(Error::NotFound {
            kind: EntityKind::Institution,
            id,
        })?;

        let draft = InstitutionDraft {
            name: dto.name.or_else(|| Some(existing.name.clone())),
        };
        let lookup = InstitutionLookup {
            name_taken: match candidate_name(draft.name.as_deref()) {
                Some(name) => repo.exists_by_name(name, Some(id)).await?,
                None => false,
            },
        };
        let valid = validate_institution(&draft, &lookup)?;

        let institution = repo
            .update(existing, valid)
            .await
            .map_err(|err| map_unique_violation(err, EntityKind::Institution))?;
        txn.commit().await?;

        tracing::info!("Updated institution {}", id);

        Ok(institution_dto(institution))
    }

    /// Marks the institution inactive. Its teams are left untouched.
    ///
    /// # Returns
    /// - `Ok(InstitutionDto)` - The institution in its inactive state
    /// - `Err(Error::NotFound)` - No institution with this id
    /// - `Err(Error::ConflictError)` - The institution was already inactive
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn deactivate(&self, id: i32) -> Result<InstitutionDto, Error> {
        let txn = self.db.begin().await?;
        let repo = InstitutionRepository::new(&txn);

        let existing = repo.get_by_id(id).await?.ok_or(Error::NotFound {
            kind: EntityKind::Institution,
            id,
        })?;

        LifecycleGuard::new(&txn)
            .authorize_deactivation(
                EntityKind::Institution,
                id,
                ActivityState::from(existing.active),
            )
            .await?;

        let institution = repo.set_inactive(existing).await?;
        txn.commit().await?;

        tracing::info!("Deactivated institution {}", id);

        Ok(institution_dto(institution))
    }
}

fn institution_dto(institution: InstitutionModel) -> InstitutionDto {
    InstitutionDto {
        id: institution.id,
        name: institution.name,
        active: institution.active,
    }
}

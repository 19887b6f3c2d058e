use sea_orm::ConnectionTrait;

use crate::server::{
    data::{tournament::TournamentRepository, tournament_match::MatchRepository},
    error::Error,
    model::{kind::EntityKind, lifecycle::ActivityState},
};

/// Authorizes soft-delete transitions against the records that still reference a record.
pub struct LifecycleGuard<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LifecycleGuard<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the first kind of record in `kind`'s dependency set that references `id`.
    ///
    /// # Returns
    /// - `Ok(Some(EntityKind))` - At least one record of this kind references `id`
    /// - `Ok(None)` - Nothing references `id`, or `kind` has no dependency set
    /// - `Err(Error::DbErr)` - A dependent query failed
    pub async fn find_blocking_dependent(
        &self,
        kind: EntityKind,
        id: i32,
    ) -> Result<Option<EntityKind>, Error> {
        let match_repo = MatchRepository::new(self.db);
        let tournament_repo = TournamentRepository::new(self.db);

        for &dependent in kind.dependents() {
            let referenced = match (kind, dependent) {
                (EntityKind::Team, EntityKind::Match) => match_repo.exists_for_team(id).await?,
                (EntityKind::Season, EntityKind::Tournament) => {
                    tournament_repo.exists_for_season(id).await?
                }
                (EntityKind::Season, EntityKind::Match) => match_repo.exists_for_season(id).await?,
                (EntityKind::Tournament, EntityKind::Match) => {
                    match_repo.exists_for_tournament(id).await?
                }
                (kind, dependent) => {
                    return Err(Error::InternalError(format!(
                        "No dependent query for {} referenced by {}",
                        kind,
                        dependent.plural()
                    )))
                }
            };

            if referenced {
                return Ok(Some(dependent));
            }
        }

        Ok(None)
    }

    /// Authorizes moving the record from its current state to inactive.
    ///
    /// Dependents are only queried for active records.
    ///
    /// # Returns
    /// - `Ok(())` - The record may be deactivated
    /// - `Err(Error::ConflictError)` - Already inactive, or still referenced
    /// - `Err(Error::DbErr)` - A dependent query failed
    pub async fn authorize_deactivation(
        &self,
        kind: EntityKind,
        id: i32,
        state: ActivityState,
    ) -> Result<(), Error> {
        let blocking = if state.is_active() {
            self.find_blocking_dependent(kind, id).await?
        } else {
            None
        };

        state.deactivate(kind, id, blocking)?;

        Ok(())
    }
}

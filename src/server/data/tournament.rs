use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        db::{SeasonModel, TournamentModel},
        pagination::Pagination,
    },
    validation::tournament::ValidTournament,
};

pub struct TournamentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TournamentRepository<'a, C> {
    /// Creates a new instance of [`TournamentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        tournament: ValidTournament,
        active: bool,
    ) -> Result<TournamentModel, DbErr> {
        let tournament = entity::tournament::ActiveModel {
            season_id: ActiveValue::Set(tournament.season_id),
            name: ActiveValue::Set(tournament.name),
            description: ActiveValue::Set(tournament.description),
            start_date: ActiveValue::Set(tournament.start_date),
            end_date: ActiveValue::Set(tournament.end_date),
            active: ActiveValue::Set(active),
            ..Default::default()
        };

        tournament.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<TournamentModel>, DbErr> {
        entity::prelude::Tournament::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets a tournament together with its season
    pub async fn get_with_season(
        &self,
        id: i32,
    ) -> Result<Option<(TournamentModel, Option<SeasonModel>)>, DbErr> {
        entity::prelude::Tournament::find_by_id(id)
            .find_also_related(entity::season::Entity)
            .one(self.db)
            .await
    }

    /// Returns one page of tournaments with their seasons ordered by id along with the total count
    pub async fn get_page(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<(TournamentModel, Option<SeasonModel>)>, u64), DbErr> {
        let paginator = entity::prelude::Tournament::find()
            .find_also_related(entity::season::Entity)
            .order_by_asc(entity::tournament::Column::Id)
            .paginate(self.db, pagination.offset);

        let count = paginator.num_items().await?;
        let tournaments = paginator.fetch_page(pagination.page_index()).await?;

        Ok((tournaments, count))
    }

    pub async fn update(
        &self,
        tournament: TournamentModel,
        changes: ValidTournament,
    ) -> Result<TournamentModel, DbErr> {
        let mut tournament_am = tournament.into_active_model();
        tournament_am.season_id = ActiveValue::Set(changes.season_id);
        tournament_am.name = ActiveValue::Set(changes.name);
        tournament_am.description = ActiveValue::Set(changes.description);
        tournament_am.start_date = ActiveValue::Set(changes.start_date);
        tournament_am.end_date = ActiveValue::Set(changes.end_date);

        tournament_am.update(self.db).await
    }

    pub async fn set_inactive(&self, tournament: TournamentModel) -> Result<TournamentModel, DbErr> {
        let mut tournament_am = tournament.into_active_model();
        tournament_am.active = ActiveValue::Set(false);

        tournament_am.update(self.db).await
    }

    /// Checks whether a tournament other than `exclude_id` already uses `name`
    pub async fn exists_by_name(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Tournament::find().filter(entity::tournament::Column::Name.eq(name));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::tournament::Column::Id.ne(exclude_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks whether any tournament, active or not, belongs to the season
    pub async fn exists_for_season(&self, season_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Tournament::find()
            .filter(entity::tournament::Column::SeasonId.eq(season_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        db::{InstitutionModel, TeamModel},
        pagination::Pagination,
    },
    validation::team::ValidTeam,
};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new instance of [`TeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active team
    pub async fn create(&self, team: ValidTeam) -> Result<TeamModel, DbErr> {
        let team = entity::team::ActiveModel {
            institution_id: ActiveValue::Set(team.institution_id),
            name: ActiveValue::Set(team.name),
            image: ActiveValue::Set(team.image),
            active: ActiveValue::Set(true),
            ..Default::default()
        };

        team.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<TeamModel>, DbErr> {
        entity::prelude::Team::find_by_id(id).one(self.db).await
    }

    /// Gets a team together with its owning institution
    pub async fn get_with_institution(
        &self,
        id: i32,
    ) -> Result<Option<(TeamModel, Option<InstitutionModel>)>, DbErr> {
        entity::prelude::Team::find_by_id(id)
            .find_also_related(entity::institution::Entity)
            .one(self.db)
            .await
    }

    /// Gets a team by its exact, case-sensitive name together with its owning institution
    pub async fn get_by_name(
        &self,
        name: &str,
    ) -> Result<Option<(TeamModel, Option<InstitutionModel>)>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::Name.eq(name))
            .find_also_related(entity::institution::Entity)
            .one(self.db)
            .await
    }

    /// Returns one page of teams with their institutions ordered by id along with the total count
    pub async fn get_page(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<(TeamModel, Option<InstitutionModel>)>, u64), DbErr> {
        let paginator = entity::prelude::Team::find()
            .find_also_related(entity::institution::Entity)
            .order_by_asc(entity::team::Column::Id)
            .paginate(self.db, pagination.offset);

        let count = paginator.num_items().await?;
        let teams = paginator.fetch_page(pagination.page_index()).await?;

        Ok((teams, count))
    }

    pub async fn update(&self, team: TeamModel, changes: ValidTeam) -> Result<TeamModel, DbErr> {
        let mut team_am = team.into_active_model();
        team_am.institution_id = ActiveValue::Set(changes.institution_id);
        team_am.name = ActiveValue::Set(changes.name);
        team_am.image = ActiveValue::Set(changes.image);

        team_am.update(self.db).await
    }

    pub async fn set_inactive(&self, team: TeamModel) -> Result<TeamModel, DbErr> {
        let mut team_am = team.into_active_model();
        team_am.active = ActiveValue::Set(false);

        team_am.update(self.db).await
    }

    /// Checks whether a team other than `exclude_id` already uses `name`
    pub async fn exists_by_name(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Team::find().filter(entity::team::Column::Name.eq(name));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::team::Column::Id.ne(exclude_id));
        }

        Ok(query.count(self.db).await? > 0)
    }
}

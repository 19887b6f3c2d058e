use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{db::SeasonModel, pagination::Pagination},
    validation::season::ValidSeason,
};

pub struct SeasonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeasonRepository<'a, C> {
    /// Creates a new instance of [`SeasonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, season: ValidSeason, active: bool) -> Result<SeasonModel, DbErr> {
        let season = entity::season::ActiveModel {
            name: ActiveValue::Set(season.name),
            description: ActiveValue::Set(season.description),
            kind: ActiveValue::Set(season.kind.to_string()),
            start_date: ActiveValue::Set(season.start_date),
            end_date: ActiveValue::Set(season.end_date),
            active: ActiveValue::Set(active),
            ..Default::default()
        };

        season.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<SeasonModel>, DbErr> {
        entity::prelude::Season::find_by_id(id).one(self.db).await
    }

    /// Returns one page of seasons ordered by id along with the total count
    pub async fn get_page(&self, pagination: Pagination) -> Result<(Vec<SeasonModel>, u64), DbErr> {
        let paginator = entity::prelude::Season::find()
            .order_by_asc(entity::season::Column::Id)
            .paginate(self.db, pagination.offset);

        let count = paginator.num_items().await?;
        let seasons = paginator.fetch_page(pagination.page_index()).await?;

        Ok((seasons, count))
    }

    pub async fn update(
        &self,
        season: SeasonModel,
        changes: ValidSeason,
    ) -> Result<SeasonModel, DbErr> {
        let mut season_am = season.into_active_model();
        season_am.name = ActiveValue::Set(changes.name);
        season_am.description = ActiveValue::Set(changes.description);
        season_am.kind = ActiveValue::Set(changes.kind.to_string());
        season_am.start_date = ActiveValue::Set(changes.start_date);
        season_am.end_date = ActiveValue::Set(changes.end_date);

        season_am.update(self.db).await
    }

    pub async fn set_inactive(&self, season: SeasonModel) -> Result<SeasonModel, DbErr> {
        let mut season_am = season.into_active_model();
        season_am.active = ActiveValue::Set(false);

        season_am.update(self.db).await
    }

    /// Checks whether a season other than `exclude_id` already uses `name`
    pub async fn exists_by_name(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Season::find().filter(entity::season::Column::Name.eq(name));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::season::Column::Id.ne(exclude_id));
        }

        Ok(query.count(self.db).await? > 0)
    }
}

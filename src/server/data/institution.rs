use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{db::InstitutionModel, pagination::Pagination},
    validation::institution::ValidInstitution,
};

pub struct InstitutionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InstitutionRepository<'a, C> {
    /// Creates a new instance of [`InstitutionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active institution
    pub async fn create(&self, institution: ValidInstitution) -> Result<InstitutionModel, DbErr> {
        let institution = entity::institution::ActiveModel {
            name: ActiveValue::Set(institution.name),
            active: ActiveValue::Set(true),
            ..Default::default()
        };

        institution.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<InstitutionModel>, DbErr> {
        entity::prelude::Institution::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Returns one page of institutions ordered by id along with the total count
    pub async fn get_page(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<InstitutionModel>, u64), DbErr> {
        let paginator = entity::prelude::Institution::find()
            .order_by_asc(entity::institution::Column::Id)
            .paginate(self.db, pagination.offset);

        let count = paginator.num_items().await?;
        let institutions = paginator.fetch_page(pagination.page_index()).await?;

        Ok((institutions, count))
    }

    pub async fn update(
        &self,
        institution: InstitutionModel,
        changes: ValidInstitution,
    ) -> Result<InstitutionModel, DbErr> {
        let mut institution_am = institution.into_active_model();
        institution_am.name = ActiveValue::Set(changes.name);

        institution_am.update(self.db).await
    }

    pub async fn set_inactive(
        &self,
        institution: InstitutionModel,
    ) -> Result<InstitutionModel, DbErr> {
        let mut institution_am = institution.into_active_model();
        institution_am.active = ActiveValue::Set(false);

        institution_am.update(self.db).await
    }

    /// Checks whether an institution other than `exclude_id` already uses `name`
    pub async fn exists_by_name(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Institution::find()
            .filter(entity::institution::Column::Name.eq(name));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::institution::Column::Id.ne(exclude_id));
        }

        Ok(query.count(self.db).await? > 0)
    }
}

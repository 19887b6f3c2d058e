use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{error::TestError, model::InstitutionModel, TestContext};

impl TestContext {
    pub fn institution<'a>(&'a mut self) -> InstitutionFixtures<'a> {
        InstitutionFixtures { setup: self }
    }
}

pub struct InstitutionFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> InstitutionFixtures<'a> {
    /// Insert an active institution.
    pub async fn insert_institution(&self, name: &str) -> Result<InstitutionModel, TestError> {
        Ok(
            entity::prelude::Institution::insert(entity::institution::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                active: ActiveValue::Set(true),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Return the institution with `name`, inserting it if it does not exist yet.
    pub async fn get_or_insert(&self, name: &str) -> Result<InstitutionModel, TestError> {
        let existing = entity::prelude::Institution::find()
            .filter(entity::institution::Column::Name.eq(name))
            .one(&self.setup.db)
            .await?;

        match existing {
            Some(institution) => Ok(institution),
            None => self.insert_institution(name).await,
        }
    }
}

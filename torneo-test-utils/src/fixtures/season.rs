use chrono::NaiveDateTime;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::SeasonModel, TestContext};

impl TestContext {
    pub fn season<'a>(&'a mut self) -> SeasonFixtures<'a> {
        SeasonFixtures { setup: self }
    }
}

pub struct SeasonFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> SeasonFixtures<'a> {
    /// Insert an active official season.
    pub async fn insert_season(
        &self,
        name: &str,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
    ) -> Result<SeasonModel, TestError> {
        Ok(entity::prelude::Season::insert(entity::season::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(format!("{} description", name)),
            kind: ActiveValue::Set("Official".to_string()),
            start_date: ActiveValue::Set(start_date),
            end_date: ActiveValue::Set(end_date),
            active: ActiveValue::Set(true),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}

use chrono::NaiveDateTime;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::TournamentModel, TestContext};

impl TestContext {
    pub fn tournament<'a>(&'a mut self) -> TournamentFixtures<'a> {
        TournamentFixtures { setup: self }
    }
}

pub struct TournamentFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> TournamentFixtures<'a> {
    /// Insert an active tournament. The range is not checked against the season.
    pub async fn insert_tournament(
        &self,
        season_id: i32,
        name: &str,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
    ) -> Result<TournamentModel, TestError> {
        Ok(
            entity::prelude::Tournament::insert(entity::tournament::ActiveModel {
                season_id: ActiveValue::Set(season_id),
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(format!("{} description", name)),
                start_date: ActiveValue::Set(start_date),
                end_date: ActiveValue::Set(end_date),
                active: ActiveValue::Set(true),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}

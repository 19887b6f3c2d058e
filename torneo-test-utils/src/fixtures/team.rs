use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{InstitutionModel, TeamModel},
    TestContext,
};

impl TestContext {
    pub fn team<'a>(&'a mut self) -> TeamFixtures<'a> {
        TeamFixtures { setup: self }
    }
}

pub struct TeamFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> TeamFixtures<'a> {
    /// Insert an active team without an image.
    pub async fn insert_team(
        &self,
        institution_id: i32,
        name: &str,
    ) -> Result<TeamModel, TestError> {
        Ok(entity::prelude::Team::insert(entity::team::ActiveModel {
            institution_id: ActiveValue::Set(institution_id),
            name: ActiveValue::Set(name.to_string()),
            image: ActiveValue::Set(None),
            active: ActiveValue::Set(true),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a team together with an institution named after it.
    pub async fn insert_mock_team(
        &mut self,
        name: &str,
    ) -> Result<(TeamModel, InstitutionModel), TestError> {
        let institution = self
            .setup
            .institution()
            .insert_institution(&format!("Institution of {}", name))
            .await?;

        let team = self.insert_team(institution.id, name).await?;

        Ok((team, institution))
    }
}

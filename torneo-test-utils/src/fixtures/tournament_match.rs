use chrono::NaiveDateTime;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::date,
    model::{InstitutionModel, MatchModel, SeasonModel, TeamModel, TournamentModel},
    TestContext,
};

impl TestContext {
    pub fn tournament_match<'a>(&'a mut self) -> MatchFixtures<'a> {
        MatchFixtures { setup: self }
    }
}

pub struct MatchFixtures<'a> {
    setup: &'a mut TestContext,
}

/// Records a match can reference, inserted by [`MatchFixtures::insert_mock_schedule`].
///
/// The season spans 2025 and the tournament runs from 2025-03-01 to 2025-05-01, both
/// bounds at midnight.
pub struct MockSchedule {
    pub institution: InstitutionModel,
    pub local: TeamModel,
    pub visitor: TeamModel,
    pub season: SeasonModel,
    pub tournament: TournamentModel,
}

impl<'a> MatchFixtures<'a> {
    /// Insert a match between two teams.
    pub async fn insert_match(
        &self,
        tournament: &TournamentModel,
        local_team_id: i32,
        visitor_team_id: i32,
        match_date: NaiveDateTime,
        uploaded: bool,
    ) -> Result<MatchModel, TestError> {
        Ok(
            entity::prelude::TournamentMatch::insert(entity::tournament_match::ActiveModel {
                date: ActiveValue::Set(match_date),
                local_score: ActiveValue::Set(None),
                visitor_score: ActiveValue::Set(None),
                uploaded: ActiveValue::Set(uploaded),
                local_team_id: ActiveValue::Set(local_team_id),
                visitor_team_id: ActiveValue::Set(visitor_team_id),
                tournament_id: ActiveValue::Set(tournament.id),
                season_id: ActiveValue::Set(tournament.season_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an institution with two teams, a season and a tournament inside it.
    pub async fn insert_mock_schedule(&mut self) -> Result<MockSchedule, TestError> {
        let institution = self
            .setup
            .institution()
            .insert_institution("Colegio Central")
            .await?;
        let local = self
            .setup
            .team()
            .insert_team(institution.id, "Tigres FC")
            .await?;
        let visitor = self
            .setup
            .team()
            .insert_team(institution.id, "Leones FC")
            .await?;
        let season = self
            .setup
            .season()
            .insert_season("Temporada 2025", date(2025, 1, 1), date(2025, 12, 31))
            .await?;
        let tournament = self
            .setup
            .tournament()
            .insert_tournament(
                season.id,
                "Copa Apertura",
                date(2025, 3, 1),
                date(2025, 5, 1),
            )
            .await?;

        Ok(MockSchedule {
            institution,
            local,
            visitor,
            season,
            tournament,
        })
    }
}

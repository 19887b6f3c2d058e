use chrono::Duration;
use torneo::{
    model::tournament_match::{CreateMatchDto, UpdateMatchDto},
    server::{
        error::conflict::ConflictError,
        service::tournament_match::MatchService,
        validation::tournament_match::{
            MISSING_TEAMS, OUTSIDE_TOURNAMENT, SAME_TEAM, SCHEDULE_CONFLICT,
        },
    },
};

use super::*;

fn match_payload(schedule: &MockSchedule, match_date: chrono::NaiveDateTime) -> CreateMatchDto {
    CreateMatchDto {
        date: Some(match_date),
        local_team_id: Some(schedule.local.id),
        visitor_team_id: Some(schedule.visitor.id),
        tournament_id: Some(schedule.tournament.id),
        season_id: Some(schedule.season.id),
        ..Default::default()
    }
}

mod create {
    use super::*;

    /// Expect a match on the tournament's last instant to be accepted
    #[tokio::test]
    async fn accepts_tournament_bounds() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let schedule = test.tournament_match().insert_mock_schedule().await?;

        let tournament_match = MatchService::new(&test.db)
            .create(match_payload(&schedule, schedule.tournament.end_date))
            .await
            .unwrap();

        assert_eq!(tournament_match.date, date(2025, 5, 1));
        assert!(!tournament_match.uploaded);
        assert_eq!(tournament_match.local_score, None);
        assert_eq!(tournament_match.local_team_name.as_deref(), Some("Tigres FC"));
        assert_eq!(tournament_match.visitor_team_name.as_deref(), Some("Leones FC"));
        assert_eq!(tournament_match.tournament_name.as_deref(), Some("Copa Apertura"));
        assert_eq!(tournament_match.season_name.as_deref(), Some("Temporada 2025"));

        Ok(())
    }

    /// Expect a match one second after the tournament ends to be rejected
    #[tokio::test]
    async fn rejects_date_outside_tournament() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let schedule = test.tournament_match().insert_mock_schedule().await?;

        let result = MatchService::new(&test.db)
            .create(match_payload(
                &schedule,
                schedule.tournament.end_date + Duration::seconds(1),
            ))
            .await;

        assert_eq!(
            field_messages(&result.unwrap_err(), "date"),
            [OUTSIDE_TOURNAMENT]
        );

        Ok(())
    }

    #[tokio::test]
    async fn rejects_team_playing_itself() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let schedule = test.tournament_match().insert_mock_schedule().await?;

        let result = MatchService::new(&test.db)
            .create(CreateMatchDto {
                visitor_team_id: Some(schedule.local.id),
                ..match_payload(&schedule, datetime(2025, 3, 15, 10, 0))
            })
            .await;

        assert_eq!(
            field_messages(&result.unwrap_err(), "visitor_team_id"),
            [SAME_TEAM]
        );

        Ok(())
    }

    #[tokio::test]
    async fn requires_a_team() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let schedule = test.tournament_match().insert_mock_schedule().await?;

        let result = MatchService::new(&test.db)
            .create(CreateMatchDto {
                local_team_id: None,
                visitor_team_id: None,
                ..match_payload(&schedule, datetime(2025, 3, 15, 10, 0))
            })
            .await;

        assert_eq!(
            field_messages(&result.unwrap_err(), "teams"),
            [MISSING_TEAMS]
        );

        Ok(())
    }

    /// Expect a team already playing at the same instant to block a match against
    /// a different opponent
    #[tokio::test]
    async fn rejects_schedule_conflict() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let schedule = test.tournament_match().insert_mock_schedule().await?;
        let kickoff = datetime(2025, 4, 5, 15, 0);
        test.tournament_match()
            .insert_match(
                &schedule.tournament,
                schedule.local.id,
                schedule.visitor.id,
                kickoff,
                false,
            )
            .await?;
        let pumas = test
            .team()
            .insert_team(schedule.institution.id, "Pumas FC")
            .await?;

        let service = MatchService::new(&test.db);
        let result = service
            .create(CreateMatchDto {
                local_team_id: Some(pumas.id),
                ..match_payload(&schedule, kickoff)
            })
            .await;
        assert_eq!(
            field_messages(&result.unwrap_err(), "date"),
            [SCHEDULE_CONFLICT]
        );

        let later = service
            .create(CreateMatchDto {
                local_team_id: Some(pumas.id),
                ..match_payload(&schedule, kickoff + Duration::minutes(1))
            })
            .await;
        assert!(later.is_ok());

        Ok(())
    }

    #[tokio::test]
    async fn rejects_unknown_references() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let schedule = test.tournament_match().insert_mock_schedule().await?;

        let result = MatchService::new(&test.db)
            .create(CreateMatchDto {
                tournament_id: Some(99),
                season_id: Some(98),
                ..match_payload(&schedule, datetime(2025, 3, 15, 10, 0))
            })
            .await;

        let err = result.unwrap_err();
        assert_eq!(
            field_messages(&err, "tournament_id"),
            ["Tournament 99 does not exist."]
        );
        assert_eq!(field_messages(&err, "season_id"), ["Season 98 does not exist."]);

        Ok(())
    }
}

mod update {
    use super::*;

    /// Expect a match rescheduled to its own slot not to conflict with itself
    #[tokio::test]
    async fn ignores_own_slot() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let schedule = test.tournament_match().insert_mock_schedule().await?;
        let kickoff = datetime(2025, 4, 5, 15, 0);
        let existing = test
            .tournament_match()
            .insert_match(
                &schedule.tournament,
                schedule.local.id,
                schedule.visitor.id,
                kickoff,
                false,
            )
            .await?;

        let updated = MatchService::new(&test.db)
            .update(
                existing.id,
                UpdateMatchDto {
                    date: Some(kickoff),
                    local_score: Some(2),
                    visitor_score: Some(1),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.local_score, Some(2));
        assert_eq!(updated.visitor_score, Some(1));

        Ok(())
    }

    /// Expect moving only the visitor onto the stored local team to be a team playing itself
    #[tokio::test]
    async fn rejects_one_sided_self_play() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let schedule = test.tournament_match().insert_mock_schedule().await?;
        let existing = test
            .tournament_match()
            .insert_match(
                &schedule.tournament,
                schedule.local.id,
                schedule.visitor.id,
                datetime(2025, 4, 5, 15, 0),
                false,
            )
            .await?;

        let result = MatchService::new(&test.db)
            .update(
                existing.id,
                UpdateMatchDto {
                    visitor_team_id: Some(schedule.local.id),
                    ..Default::default()
                },
            )
            .await;

        assert_eq!(
            field_messages(&result.unwrap_err(), "visitor_team_id"),
            [SAME_TEAM]
        );

        Ok(())
    }

    #[tokio::test]
    async fn rejects_date_outside_stored_tournament() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let schedule = test.tournament_match().insert_mock_schedule().await?;
        let existing = test
            .tournament_match()
            .insert_match(
                &schedule.tournament,
                schedule.local.id,
                schedule.visitor.id,
                datetime(2025, 4, 5, 15, 0),
                false,
            )
            .await?;

        let result = MatchService::new(&test.db)
            .update(
                existing.id,
                UpdateMatchDto {
                    date: Some(datetime(2025, 2, 28, 23, 59)),
                    ..Default::default()
                },
            )
            .await;

        assert_eq!(
            field_messages(&result.unwrap_err(), "date"),
            [OUTSIDE_TOURNAMENT]
        );

        Ok(())
    }
}

mod delete {
    use super::*;

    /// Expect an uploaded match to survive deletion until it is unlocked
    #[tokio::test]
    async fn respects_upload_lock() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let schedule = test.tournament_match().insert_mock_schedule().await?;
        let existing = test
            .tournament_match()
            .insert_match(
                &schedule.tournament,
                schedule.local.id,
                schedule.visitor.id,
                datetime(2025, 4, 5, 15, 0),
                true,
            )
            .await?;

        let service = MatchService::new(&test.db);

        assert!(matches!(
            service.delete(existing.id).await,
            Err(Error::ConflictError(ConflictError::MatchLocked(id))) if id == existing.id
        ));
        assert!(service.get(existing.id).await.is_ok());

        service
            .update(
                existing.id,
                UpdateMatchDto {
                    uploaded: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let deleted = service.delete(existing.id).await.unwrap();
        assert_eq!(deleted.id, existing.id);

        assert!(matches!(
            service.get(existing.id).await,
            Err(Error::NotFound {
                kind: EntityKind::Match,
                ..
            })
        ));

        Ok(())
    }
}

mod list {
    use torneo::server::model::pagination::Pagination;

    use super::*;

    /// Expect every listed match to carry the names of the records it references
    #[tokio::test]
    async fn includes_related_names() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let schedule = test.tournament_match().insert_mock_schedule().await?;
        let pumas = test
            .team()
            .insert_team(schedule.institution.id, "Pumas FC")
            .await?;
        for (local, visitor, day) in [
            (schedule.local.id, schedule.visitor.id, 8),
            (pumas.id, schedule.local.id, 15),
        ] {
            test.tournament_match()
                .insert_match(
                    &schedule.tournament,
                    local,
                    visitor,
                    datetime(2025, 3, day, 18, 0),
                    false,
                )
                .await?;
        }

        let page = MatchService::new(&test.db)
            .list(Pagination { page: 1, offset: 10 })
            .await
            .unwrap();

        assert_eq!(page.count, 2);
        assert_eq!(page.results[1].local_team_name.as_deref(), Some("Pumas FC"));
        assert_eq!(page.results[1].visitor_team_name.as_deref(), Some("Tigres FC"));
        assert!(page
            .results
            .iter()
            .all(|m| m.season_name.as_deref() == Some("Temporada 2025")));

        Ok(())
    }
}

use torneo::{
    model::tournament::{CreateTournamentDto, UpdateTournamentDto},
    server::{error::conflict::ConflictError, service::tournament::TournamentService},
};

use super::*;

fn tournament_payload(season_id: i32, start: (u32, u32), end: (u32, u32)) -> CreateTournamentDto {
    CreateTournamentDto {
        season_id: Some(season_id),
        name: Some("Copa Clausura".to_string()),
        description: Some("Segunda mitad del año".to_string()),
        start_date: Some(date(2025, start.0, start.1)),
        end_date: Some(date(2025, end.0, end.1)),
        active: Some(true),
    }
}

mod create {
    use super::*;

    /// Expect a tournament spanning its whole season to be accepted
    #[tokio::test]
    async fn accepts_range_equal_to_season() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let season = test
            .season()
            .insert_season("Temporada 2025", date(2025, 1, 1), date(2025, 12, 31))
            .await?;

        let tournament = TournamentService::new(&test.db)
            .create(tournament_payload(season.id, (1, 1), (12, 31)))
            .await
            .unwrap();

        assert_eq!(tournament.season_name.as_deref(), Some("Temporada 2025"));
        assert!(tournament.active);

        Ok(())
    }

    /// Expect a start before the season to be reported on start_date only
    #[tokio::test]
    async fn rejects_start_before_season() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let season = test
            .season()
            .insert_season("Temporada 2025", date(2025, 2, 1), date(2025, 12, 31))
            .await?;

        let result = TournamentService::new(&test.db)
            .create(tournament_payload(season.id, (1, 31), (6, 30)))
            .await;

        let err = result.unwrap_err();
        assert_eq!(
            field_messages(&err, "start_date"),
            ["The start date must be within the season's date range."]
        );
        assert!(field_messages(&err, "end_date").is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn rejects_end_after_season() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let season = test
            .season()
            .insert_season("Temporada 2025", date(2025, 1, 1), date(2025, 6, 30))
            .await?;

        let result = TournamentService::new(&test.db)
            .create(tournament_payload(season.id, (3, 1), (7, 1)))
            .await;

        let err = result.unwrap_err();
        assert_eq!(
            field_messages(&err, "end_date"),
            ["The end date must be within the season's date range."]
        );

        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_name() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let schedule = test.tournament_match().insert_mock_schedule().await?;

        let result = TournamentService::new(&test.db)
            .create(CreateTournamentDto {
                name: Some("Copa Apertura".to_string()),
                ..tournament_payload(schedule.season.id, (6, 1), (7, 1))
            })
            .await;

        assert_eq!(
            field_messages(&result.unwrap_err(), "name"),
            ["Tournament with this name already exists."]
        );

        Ok(())
    }

    #[tokio::test]
    async fn rejects_unknown_season() -> Result<(), TestError> {
        let test = TestBuilder::new().with_tournament_tables().build().await?;

        let result = TournamentService::new(&test.db)
            .create(tournament_payload(3, (3, 1), (7, 1)))
            .await;

        let err = result.unwrap_err();
        assert_eq!(
            field_messages(&err, "season_id"),
            ["Season 3 does not exist."]
        );

        Ok(())
    }
}

mod update {
    use super::*;

    /// Expect a start moved past the stored end to be rejected
    #[tokio::test]
    async fn rejects_inverted_merged_range() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let schedule = test.tournament_match().insert_mock_schedule().await?;

        let result = TournamentService::new(&test.db)
            .update(
                schedule.tournament.id,
                UpdateTournamentDto {
                    start_date: Some(date(2025, 6, 1)),
                    ..Default::default()
                },
            )
            .await;

        let err = result.unwrap_err();
        assert_eq!(
            field_messages(&err, "start_date"),
            ["The start date cannot be later than the end date."]
        );

        Ok(())
    }

    #[tokio::test]
    async fn updates_description() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let schedule = test.tournament_match().insert_mock_schedule().await?;

        let tournament = TournamentService::new(&test.db)
            .update(
                schedule.tournament.id,
                UpdateTournamentDto {
                    description: Some("Fase de grupos".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(tournament.description, "Fase de grupos");
        assert_eq!(tournament.name, "Copa Apertura");

        Ok(())
    }
}

mod deactivate {
    use super::*;

    /// Expect a tournament with a match to stay active
    #[tokio::test]
    async fn fails_for_tournament_with_match() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let schedule = test.tournament_match().insert_mock_schedule().await?;
        test.tournament_match()
            .insert_match(
                &schedule.tournament,
                schedule.local.id,
                schedule.visitor.id,
                datetime(2025, 4, 2, 16, 30),
                true,
            )
            .await?;

        let result = TournamentService::new(&test.db)
            .deactivate(schedule.tournament.id)
            .await;

        assert!(matches!(
            result,
            Err(Error::ConflictError(ConflictError::HasDependents {
                kind: EntityKind::Tournament,
                dependents: EntityKind::Match,
                ..
            }))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn deactivates_tournament_without_matches() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let schedule = test.tournament_match().insert_mock_schedule().await?;

        let tournament = TournamentService::new(&test.db)
            .deactivate(schedule.tournament.id)
            .await
            .unwrap();

        assert!(!tournament.active);

        Ok(())
    }
}

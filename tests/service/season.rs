use torneo::{
    model::{
        season::{CreateSeasonDto, UpdateSeasonDto},
        tournament_match::CreateMatchDto,
    },
    server::{
        error::conflict::ConflictError,
        service::{season::SeasonService, tournament_match::MatchService},
    },
};

use super::*;

fn season_payload(name: &str) -> CreateSeasonDto {
    CreateSeasonDto {
        name: Some(name.to_string()),
        description: Some("Liga escolar".to_string()),
        kind: Some("Official".to_string()),
        start_date: Some(date(2025, 1, 1)),
        end_date: Some(date(2025, 12, 31)),
        active: None,
    }
}

mod create {
    use super::*;

    /// Expect a season to be created inactive unless requested otherwise
    #[tokio::test]
    async fn defaults_to_inactive() -> Result<(), TestError> {
        let test = TestBuilder::new().with_tournament_tables().build().await?;

        let service = SeasonService::new(&test.db);
        let inactive = service
            .create(season_payload("Temporada 2025"))
            .await
            .unwrap();
        let active = service
            .create(CreateSeasonDto {
                active: Some(true),
                ..season_payload("Temporada 2026")
            })
            .await
            .unwrap();

        assert!(!inactive.active);
        assert_eq!(inactive.kind, "Official");
        assert!(active.active);

        Ok(())
    }

    /// Expect an end date before the start date to be reported on end_date
    #[tokio::test]
    async fn rejects_inverted_range() -> Result<(), TestError> {
        let test = TestBuilder::new().with_tournament_tables().build().await?;

        let result = SeasonService::new(&test.db)
            .create(CreateSeasonDto {
                start_date: Some(date(2025, 6, 1)),
                end_date: Some(date(2025, 5, 31)),
                ..season_payload("Temporada 2025")
            })
            .await;

        let err = result.unwrap_err();
        assert_eq!(
            field_messages(&err, "end_date"),
            ["The end date cannot be earlier than the start date."]
        );

        Ok(())
    }

    /// Expect a single-day season to be accepted
    #[tokio::test]
    async fn accepts_equal_bounds() -> Result<(), TestError> {
        let test = TestBuilder::new().with_tournament_tables().build().await?;

        let result = SeasonService::new(&test.db)
            .create(CreateSeasonDto {
                start_date: Some(date(2025, 6, 1)),
                end_date: Some(date(2025, 6, 1)),
                ..season_payload("Temporada relámpago")
            })
            .await;

        assert!(result.is_ok());

        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_name() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        test.season()
            .insert_season("Temporada 2025", date(2025, 1, 1), date(2025, 12, 31))
            .await?;

        let result = SeasonService::new(&test.db)
            .create(season_payload("Temporada 2025"))
            .await;

        assert_eq!(
            field_messages(&result.unwrap_err(), "name"),
            ["Season with this name already exists."]
        );

        Ok(())
    }

    #[tokio::test]
    async fn rejects_unknown_kind() -> Result<(), TestError> {
        let test = TestBuilder::new().with_tournament_tables().build().await?;

        let result = SeasonService::new(&test.db)
            .create(CreateSeasonDto {
                kind: Some("Amistosa".to_string()),
                ..season_payload("Temporada 2025")
            })
            .await;

        let err = result.unwrap_err();
        assert_eq!(
            field_messages(&err, "kind"),
            ["\"Amistosa\" is not a valid choice."]
        );

        Ok(())
    }
}

mod update {
    use super::*;

    /// Expect a partial update to keep the stored description and range
    #[tokio::test]
    async fn merges_with_stored_season() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let season = test
            .season()
            .insert_season("Temporada 2025", date(2025, 1, 1), date(2025, 12, 31))
            .await?;

        let updated = SeasonService::new(&test.db)
            .update(
                season.id,
                UpdateSeasonDto {
                    kind: Some("Friendly".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.kind, "Friendly");
        assert_eq!(updated.name, "Temporada 2025");
        assert_eq!(updated.start_date, date(2025, 1, 1));
        assert_eq!(updated.end_date, date(2025, 12, 31));

        Ok(())
    }

    /// Expect a new end date before the stored start date to be rejected
    #[tokio::test]
    async fn checks_merged_range() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let season = test
            .season()
            .insert_season("Temporada 2025", date(2025, 1, 1), date(2025, 12, 31))
            .await?;

        let result = SeasonService::new(&test.db)
            .update(
                season.id,
                UpdateSeasonDto {
                    end_date: Some(date(2024, 12, 31)),
                    ..Default::default()
                },
            )
            .await;

        assert!(field_messages(&result.unwrap_err(), "end_date").len() == 1);

        Ok(())
    }
}

mod deactivate {
    use super::*;

    /// Expect a season with a tournament to be blocked by the tournament
    #[tokio::test]
    async fn fails_for_season_with_tournament() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let schedule = test.tournament_match().insert_mock_schedule().await?;

        let result = SeasonService::new(&test.db)
            .deactivate(schedule.season.id)
            .await;

        assert!(matches!(
            result,
            Err(Error::ConflictError(ConflictError::HasDependents {
                dependents: EntityKind::Tournament,
                ..
            }))
        ));

        Ok(())
    }

    /// Expect a match to block a season that has no tournaments of its own
    #[tokio::test]
    async fn fails_for_season_with_only_matches() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let schedule = test.tournament_match().insert_mock_schedule().await?;
        let friendly = test
            .season()
            .insert_season("Amistosos 2025", date(2025, 1, 1), date(2025, 12, 31))
            .await?;
        MatchService::new(&test.db)
            .create(CreateMatchDto {
                date: Some(datetime(2025, 3, 20, 19, 0)),
                local_team_id: Some(schedule.local.id),
                visitor_team_id: Some(schedule.visitor.id),
                tournament_id: Some(schedule.tournament.id),
                season_id: Some(friendly.id),
                ..Default::default()
            })
            .await
            .unwrap();

        let result = SeasonService::new(&test.db).deactivate(friendly.id).await;

        assert!(matches!(
            result,
            Err(Error::ConflictError(ConflictError::HasDependents {
                kind: EntityKind::Season,
                dependents: EntityKind::Match,
                ..
            }))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn deactivates_unreferenced_season() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let season = test
            .season()
            .insert_season("Temporada 2025", date(2025, 1, 1), date(2025, 12, 31))
            .await?;

        let service = SeasonService::new(&test.db);
        let deactivated = service.deactivate(season.id).await.unwrap();
        assert!(!deactivated.active);

        assert!(matches!(
            service.deactivate(season.id).await,
            Err(Error::ConflictError(ConflictError::AlreadyInactive { .. }))
        ));

        Ok(())
    }
}

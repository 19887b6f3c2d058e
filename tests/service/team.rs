use torneo::{
    model::team::{CreateTeamDto, UpdateTeamDto},
    server::{
        error::conflict::ConflictError, model::pagination::Pagination, service::team::TeamService,
    },
};

use super::*;

static PNG_DATA_URI: &str = "data:image/png;base64,iVBORw0KGgo=";

mod create {
    use super::*;

    /// Expect the team to be stored with its institution name and image
    #[tokio::test]
    async fn creates_team_with_image() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_tournament_tables()
            .with_institution("Colegio Central")
            .build()
            .await?;

        let team = TeamService::new(&test.db)
            .create(CreateTeamDto {
                institution_id: Some(1),
                name: Some("Tigres FC".to_string()),
                image: Some(PNG_DATA_URI.to_string()),
            })
            .await
            .unwrap();

        assert_eq!(team.name, "Tigres FC");
        assert_eq!(team.institution_name.as_deref(), Some("Colegio Central"));
        assert_eq!(team.image.as_deref(), Some(PNG_DATA_URI));
        assert!(team.active);

        Ok(())
    }

    /// Expect a second "Tigres FC" to be rejected even under another institution
    #[tokio::test]
    async fn rejects_duplicate_name() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_tournament_tables()
            .with_team("Colegio Central", "Tigres FC")
            .with_institution("Liceo Norte")
            .build()
            .await?;

        let result = TeamService::new(&test.db)
            .create(CreateTeamDto {
                institution_id: Some(2),
                name: Some("Tigres FC".to_string()),
                image: None,
            })
            .await;

        let err = result.unwrap_err();
        assert_eq!(
            field_messages(&err, "name"),
            ["Team with this name already exists."]
        );

        Ok(())
    }

    /// Expect every failing field to be reported at once
    #[tokio::test]
    async fn reports_all_field_errors() -> Result<(), TestError> {
        let test = TestBuilder::new().with_tournament_tables().build().await?;

        let result = TeamService::new(&test.db)
            .create(CreateTeamDto {
                institution_id: Some(7),
                name: Some("   ".to_string()),
                image: Some("not an image".to_string()),
            })
            .await;

        let err = result.unwrap_err();
        assert_eq!(
            field_messages(&err, "institution_id"),
            ["Institution 7 does not exist."]
        );
        assert_eq!(field_messages(&err, "name"), ["This field may not be blank."]);
        assert_eq!(field_messages(&err, "image"), ["Invalid Base64 format."]);

        Ok(())
    }
}

mod search_by_name {
    use super::*;

    #[tokio::test]
    async fn finds_exact_name() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_tournament_tables()
            .with_team("Colegio Central", "Tigres FC")
            .build()
            .await?;

        let team = TeamService::new(&test.db)
            .search_by_name("Tigres FC")
            .await
            .unwrap();

        assert_eq!(team.name, "Tigres FC");

        Ok(())
    }

    /// Expect a case-insensitive or partial match not to resolve
    #[tokio::test]
    async fn ignores_inexact_names() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_tournament_tables()
            .with_team("Colegio Central", "Tigres FC")
            .build()
            .await?;

        let service = TeamService::new(&test.db);

        assert!(matches!(
            service.search_by_name("tigres fc").await,
            Err(Error::NameNotFound { .. })
        ));
        assert!(matches!(
            service.search_by_name("Tigres").await,
            Err(Error::NameNotFound { .. })
        ));

        Ok(())
    }
}

mod update {
    use super::*;

    /// Expect a team renamed to its own name to keep its other fields
    #[tokio::test]
    async fn allows_own_name() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_tournament_tables()
            .with_team("Colegio Central", "Tigres FC")
            .build()
            .await?;

        let team = TeamService::new(&test.db)
            .update(
                1,
                UpdateTeamDto {
                    name: Some("Tigres FC".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(team.name, "Tigres FC");
        assert_eq!(team.institution_id, 1);

        Ok(())
    }

    /// Expect an omitted image to be kept and an empty one to clear it
    #[tokio::test]
    async fn merges_image() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_tournament_tables()
            .with_institution("Colegio Central")
            .build()
            .await?;

        let service = TeamService::new(&test.db);
        let team = service
            .create(CreateTeamDto {
                institution_id: Some(1),
                name: Some("Tigres FC".to_string()),
                image: Some(PNG_DATA_URI.to_string()),
            })
            .await
            .unwrap();

        let renamed = service
            .update(
                team.id,
                UpdateTeamDto {
                    name: Some("Tigres United".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.image.as_deref(), Some(PNG_DATA_URI));

        let cleared = service
            .update(
                team.id,
                UpdateTeamDto {
                    image: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(cleared.image, None);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_name_of_other_team() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_tournament_tables()
            .with_team("Colegio Central", "Tigres FC")
            .with_team("Colegio Central", "Leones FC")
            .build()
            .await?;

        let result = TeamService::new(&test.db)
            .update(
                2,
                UpdateTeamDto {
                    name: Some("Tigres FC".to_string()),
                    ..Default::default()
                },
            )
            .await;

        let err = result.unwrap_err();
        assert_eq!(
            field_messages(&err, "name"),
            ["Team with this name already exists."]
        );

        Ok(())
    }
}

mod deactivate {
    use super::*;

    /// Expect a team playing a match to stay active
    #[tokio::test]
    async fn fails_for_team_with_match() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tournament_tables().build().await?;
        let schedule = test.tournament_match().insert_mock_schedule().await?;
        test.tournament_match()
            .insert_match(
                &schedule.tournament,
                schedule.local.id,
                schedule.visitor.id,
                datetime(2025, 3, 10, 18, 0),
                false,
            )
            .await?;

        let result = TeamService::new(&test.db)
            .deactivate(schedule.visitor.id)
            .await;

        assert!(matches!(
            result,
            Err(Error::ConflictError(ConflictError::HasDependents {
                kind: EntityKind::Team,
                dependents: EntityKind::Match,
                ..
            }))
        ));
        let team = TeamService::new(&test.db)
            .get(schedule.visitor.id)
            .await
            .unwrap();
        assert!(team.active);

        Ok(())
    }

    /// Expect the first deactivation to succeed and the second to conflict
    #[tokio::test]
    async fn deactivates_once() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_tournament_tables()
            .with_team("Colegio Central", "Tigres FC")
            .build()
            .await?;

        let service = TeamService::new(&test.db);
        let team = service.deactivate(1).await.unwrap();
        assert!(!team.active);

        assert!(matches!(
            service.deactivate(1).await,
            Err(Error::ConflictError(ConflictError::AlreadyInactive { id: 1, .. }))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn fails_for_unknown_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_tournament_tables().build().await?;

        let result = TeamService::new(&test.db).deactivate(9).await;

        assert!(matches!(
            result,
            Err(Error::NotFound {
                kind: EntityKind::Team,
                id: 9
            })
        ));

        Ok(())
    }
}

mod list {
    use super::*;

    /// Expect five teams split into pages of two
    #[tokio::test]
    async fn paginates_teams() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_tournament_tables()
            .with_team("Colegio Central", "Tigres FC")
            .with_team("Colegio Central", "Leones FC")
            .with_team("Colegio Central", "Pumas FC")
            .with_team("Colegio Central", "Jaguares FC")
            .with_team("Colegio Central", "Halcones FC")
            .build()
            .await?;

        let service = TeamService::new(&test.db);

        let first = service
            .list(Pagination { page: 1, offset: 2 })
            .await
            .unwrap();
        assert_eq!(first.count, 5);
        assert_eq!(first.pages, 3);
        assert_eq!(first.results.len(), 2);
        assert_eq!(first.results[0].name, "Tigres FC");
        assert_eq!(
            first.results[0].institution_name.as_deref(),
            Some("Colegio Central")
        );

        let last = service
            .list(Pagination { page: 3, offset: 2 })
            .await
            .unwrap();
        assert_eq!(last.results.len(), 1);
        assert_eq!(last.results[0].name, "Halcones FC");

        let beyond = service
            .list(Pagination { page: 4, offset: 2 })
            .await
            .unwrap();
        assert!(beyond.results.is_empty());

        Ok(())
    }
}

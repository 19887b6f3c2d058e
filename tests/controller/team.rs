use torneo::{
    model::{
        api::PageDto,
        team::{CreateTeamDto, TeamDto},
    },
    server::controller::team::{create_team, list_teams, search_team},
};

use super::*;

/// Expect a duplicate team name to be reported as a field-keyed validation error
#[tokio::test]
async fn create_duplicate_returns_field_errors() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .with_team("Colegio Central", "Tigres FC")
        .build()
        .await?;

    let result = create_team(
        State(test.to_app_state::<AppState>()),
        Ok(Json(CreateTeamDto {
            institution_id: Some(1),
            name: Some("Tigres FC".to_string()),
            image: None,
        })),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorDto = body_json(resp).await;
    let fields = body.data.unwrap();
    assert_eq!(fields["name"], ["Team with this name already exists."]);

    Ok(())
}

#[tokio::test]
async fn search_finds_team_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .with_team("Colegio Central", "Tigres FC")
        .build()
        .await?;

    let result = search_team(
        State(test.to_app_state::<AppState>()),
        Ok(Path("Tigres FC".to_string())),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: ApiResponseDto<TeamDto> = body_json(resp).await;
    assert_eq!(body.data.unwrap().institution_name.as_deref(), Some("Colegio Central"));

    Ok(())
}

/// Expect the defaults of page 1 and offset 10 when no parameters are given
#[tokio::test]
async fn list_applies_default_pagination() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .with_team("Colegio Central", "Tigres FC")
        .with_team("Colegio Central", "Leones FC")
        .build()
        .await?;

    let result = list_teams(
        State(test.to_app_state::<AppState>()),
        Query(PaginationParams::default()),
    )
    .await;

    let resp = result.unwrap().into_response();
    let body: ApiResponseDto<PageDto<TeamDto>> = body_json(resp).await;
    let page = body.data.unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.offset, 10);
    assert_eq!(page.pages, 1);
    assert_eq!(page.results.len(), 2);

    Ok(())
}

/// Expect a page of zero to be rejected before touching the database
#[tokio::test]
async fn list_rejects_zero_page() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tournament_tables().build().await?;

    let result = list_teams(
        State(test.to_app_state::<AppState>()),
        Query(PaginationParams {
            page: Some("0".to_string()),
            offset: None,
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

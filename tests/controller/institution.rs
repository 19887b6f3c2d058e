use torneo::{
    model::institution::{CreateInstitutionDto, InstitutionDto},
    server::controller::institution::{create_institution, delete_institution, get_institution},
};

use super::*;

/// Expect 201 Created with the stored institution in the envelope
#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tournament_tables().build().await?;

    let result = create_institution(
        State(test.to_app_state::<AppState>()),
        Ok(Json(CreateInstitutionDto {
            name: Some("Colegio Central".to_string()),
        })),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: ApiResponseDto<InstitutionDto> = body_json(resp).await;
    assert_eq!(body.status, 201);
    assert_eq!(body.data.unwrap().name, "Colegio Central");

    Ok(())
}

/// Expect 404 Not Found for an unknown id
#[tokio::test]
async fn get_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tournament_tables().build().await?;

    let result = get_institution(State(test.to_app_state::<AppState>()), Ok(Path(5))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.status, 404);

    Ok(())
}

/// Expect the second deactivation to answer 400 Bad Request
#[tokio::test]
async fn delete_twice_returns_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .with_institution("Colegio Central")
        .build()
        .await?;
    let state = test.to_app_state::<AppState>();

    let first = delete_institution(State(state.clone()), Ok(Path(1))).await;
    assert_eq!(first.unwrap().into_response().status(), StatusCode::OK);

    let second = delete_institution(State(state), Ok(Path(1))).await;
    assert_eq!(
        second.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}

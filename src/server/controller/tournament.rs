use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponseDto, ErrorDto, PageDto},
        tournament::{CreateTournamentDto, TournamentDto, UpdateTournamentDto},
    },
    server::{
        controller::util::response::api_response,
        error::Error,
        model::{
            app::AppState,
            pagination::{Pagination, PaginationParams},
        },
        service::tournament::TournamentService,
    },
};

pub static TOURNAMENT_TAG: &str = "torneos";

/// Create a tournament
///
/// The tournament's range must lie within its season's range.
#[utoipa::path(
    post,
    path = "/api/torneos/",
    tag = TOURNAMENT_TAG,
    request_body = CreateTournamentDto,
    responses(
        (status = 201, description = "Tournament created", body = ApiResponseDto<TournamentDto>),
        (status = 400, description = "Validation errors", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tournament(
    State(state): State<AppState>,
    payload: Result<Json<CreateTournamentDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let tournament = TournamentService::new(&state.db).create(payload).await?;

    Ok(api_response(
        StatusCode::CREATED,
        "Tournament created successfully",
        tournament,
    ))
}

/// Get a tournament by id
#[utoipa::path(
    get,
    path = "/api/torneos/{id}/",
    tag = TOURNAMENT_TAG,
    params(("id" = i32, Path, description = "Tournament id")),
    responses(
        (status = 200, description = "Tournament found", body = ApiResponseDto<TournamentDto>),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tournament(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id?;

    let tournament = TournamentService::new(&state.db).get(id).await?;

    Ok(api_response(StatusCode::OK, "Tournament retrieved", tournament))
}

/// List tournaments one page at a time, ordered by id
#[utoipa::path(
    get,
    path = "/api/torneos/all/",
    tag = TOURNAMENT_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of tournaments", body = ApiResponseDto<PageDto<TournamentDto>>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tournaments(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, Error> {
    let pagination = Pagination::from_params(&params)?;

    let page = TournamentService::new(&state.db).list(pagination).await?;

    Ok(api_response(StatusCode::OK, "Tournaments retrieved", page))
}

/// Partially update a tournament
///
/// The merged range is re-checked against the merged season.
#[utoipa::path(
    patch,
    path = "/api/torneos/{id}/update/",
    tag = TOURNAMENT_TAG,
    params(("id" = i32, Path, description = "Tournament id")),
    request_body = UpdateTournamentDto,
    responses(
        (status = 200, description = "Tournament updated", body = ApiResponseDto<TournamentDto>),
        (status = 400, description = "Validation errors", body = ErrorDto),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tournament(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateTournamentDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let tournament = TournamentService::new(&state.db).update(id, payload).await?;

    Ok(api_response(StatusCode::OK, "Tournament updated successfully", tournament))
}

/// Deactivate a tournament
///
/// Fails while any match references the tournament.
#[utoipa::path(
    delete,
    path = "/api/torneos/{id}/delete/",
    tag = TOURNAMENT_TAG,
    params(("id" = i32, Path, description = "Tournament id")),
    responses(
        (status = 200, description = "Tournament deactivated", body = ApiResponseDto<TournamentDto>),
        (status = 400, description = "Tournament already inactive or referenced by matches", body = ErrorDto),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_tournament(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id?;

    let tournament = TournamentService::new(&state.db).deactivate(id).await?;

    Ok(api_response(
        StatusCode::OK,
        "Tournament deactivated successfully",
        tournament,
    ))
}

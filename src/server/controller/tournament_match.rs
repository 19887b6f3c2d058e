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
        tournament_match::{CreateMatchDto, MatchDto, UpdateMatchDto},
    },
    server::{
        controller::util::response::api_response,
        error::Error,
        model::{
            app::AppState,
            pagination::{Pagination, PaginationParams},
        },
        service::tournament_match::MatchService,
    },
};

pub static MATCH_TAG: &str = "partidos";

/// Schedule a match
///
/// The date must fall within the tournament's range and neither team may already
/// play at the same instant.
#[utoipa::path(
    post,
    path = "/api/partidos/",
    tag = MATCH_TAG,
    request_body = CreateMatchDto,
    responses(
        (status = 201, description = "Match created", body = ApiResponseDto<MatchDto>),
        (status = 400, description = "Validation errors", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_match(
    State(state): State<AppState>,
    payload: Result<Json<CreateMatchDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let tournament_match = MatchService::new(&state.db).create(payload).await?;

    Ok(api_response(
        StatusCode::CREATED,
        "Match created successfully",
        tournament_match,
    ))
}

/// Get a match by id
#[utoipa::path(
    get,
    path = "/api/partidos/{id}/",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match id")),
    responses(
        (status = 200, description = "Match found", body = ApiResponseDto<MatchDto>),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_match(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id?;

    let tournament_match = MatchService::new(&state.db).get(id).await?;

    Ok(api_response(StatusCode::OK, "Match retrieved", tournament_match))
}

/// List matches one page at a time, ordered by id
#[utoipa::path(
    get,
    path = "/api/partidos/all/",
    tag = MATCH_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of matches", body = ApiResponseDto<PageDto<MatchDto>>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_matches(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, Error> {
    let pagination = Pagination::from_params(&params)?;

    let page = MatchService::new(&state.db).list(pagination).await?;

    Ok(api_response(StatusCode::OK, "Matches retrieved", page))
}

/// Partially update a match
///
/// Setting `uploaded` locks the match against deletion, clearing it unlocks it.
#[utoipa::path(
    patch,
    path = "/api/partidos/{id}/update/",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match id")),
    request_body = UpdateMatchDto,
    responses(
        (status = 200, description = "Match updated", body = ApiResponseDto<MatchDto>),
        (status = 400, description = "Validation errors", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_match(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateMatchDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let tournament_match = MatchService::new(&state.db).update(id, payload).await?;

    Ok(api_response(StatusCode::OK, "Match updated successfully", tournament_match))
}

/// Delete a match
///
/// Matches are removed permanently. Uploaded matches cannot be deleted.
#[utoipa::path(
    delete,
    path = "/api/partidos/{id}/delete/",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match id")),
    responses(
        (status = 200, description = "Match deleted", body = ApiResponseDto<MatchDto>),
        (status = 400, description = "Match is uploaded", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_match(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id?;

    let tournament_match = MatchService::new(&state.db).delete(id).await?;

    Ok(api_response(
        StatusCode::OK,
        "Match deleted successfully",
        tournament_match,
    ))
}

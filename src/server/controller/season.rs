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
        season::{CreateSeasonDto, SeasonDto, UpdateSeasonDto},
    },
    server::{
        controller::util::response::api_response,
        error::Error,
        model::{
            app::AppState,
            pagination::{Pagination, PaginationParams},
        },
        service::season::SeasonService,
    },
};

pub static SEASON_TAG: &str = "temporadas";

/// Create a season
///
/// `kind` must be `Friendly` or `Official`. Seasons are created inactive unless `active` is set.
#[utoipa::path(
    post,
    path = "/api/temporadas/",
    tag = SEASON_TAG,
    request_body = CreateSeasonDto,
    responses(
        (status = 201, description = "Season created", body = ApiResponseDto<SeasonDto>),
        (status = 400, description = "Validation errors", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_season(
    State(state): State<AppState>,
    payload: Result<Json<CreateSeasonDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let season = SeasonService::new(&state.db).create(payload).await?;

    Ok(api_response(
        StatusCode::CREATED,
        "Season created successfully",
        season,
    ))
}

/// Get a season by id
#[utoipa::path(
    get,
    path = "/api/temporadas/{id}/",
    tag = SEASON_TAG,
    params(("id" = i32, Path, description = "Season id")),
    responses(
        (status = 200, description = "Season found", body = ApiResponseDto<SeasonDto>),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_season(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id?;

    let season = SeasonService::new(&state.db).get(id).await?;

    Ok(api_response(StatusCode::OK, "Season retrieved", season))
}

/// List seasons one page at a time, ordered by id
#[utoipa::path(
    get,
    path = "/api/temporadas/all/",
    tag = SEASON_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of seasons", body = ApiResponseDto<PageDto<SeasonDto>>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_seasons(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, Error> {
    let pagination = Pagination::from_params(&params)?;

    let page = SeasonService::new(&state.db).list(pagination).await?;

    Ok(api_response(StatusCode::OK, "Seasons retrieved", page))
}

/// Partially update a season
#[utoipa::path(
    patch,
    path = "/api/temporadas/{id}/update/",
    tag = SEASON_TAG,
    params(("id" = i32, Path, description = "Season id")),
    request_body = UpdateSeasonDto,
    responses(
        (status = 200, description = "Season updated", body = ApiResponseDto<SeasonDto>),
        (status = 400, description = "Validation errors", body = ErrorDto),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_season(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateSeasonDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let season = SeasonService::new(&state.db).update(id, payload).await?;

    Ok(api_response(StatusCode::OK, "Season updated successfully", season))
}

/// Deactivate a season
///
/// Fails while any tournament or match references the season.
#[utoipa::path(
    delete,
    path = "/api/temporadas/{id}/delete/",
    tag = SEASON_TAG,
    params(("id" = i32, Path, description = "Season id")),
    responses(
        (status = 200, description = "Season deactivated", body = ApiResponseDto<SeasonDto>),
        (status = 400, description = "Season already inactive or referenced by tournaments or matches", body = ErrorDto),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_season(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id?;

    let season = SeasonService::new(&state.db).deactivate(id).await?;

    Ok(api_response(
        StatusCode::OK,
        "Season deactivated successfully",
        season,
    ))
}

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
        team::{CreateTeamDto, TeamDto, UpdateTeamDto},
    },
    server::{
        controller::util::response::api_response,
        error::Error,
        model::{
            app::AppState,
            pagination::{Pagination, PaginationParams},
        },
        service::team::TeamService,
    },
};

pub static TEAM_TAG: &str = "equipos";

/// Create a team
///
/// The image, if any, is sent as a `data:image/...;base64,` URI.
#[utoipa::path(
    post,
    path = "/api/equipos/",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Team created", body = ApiResponseDto<TeamDto>),
        (status = 400, description = "Validation errors", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    payload: Result<Json<CreateTeamDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let team = TeamService::new(&state.db).create(payload).await?;

    Ok(api_response(
        StatusCode::CREATED,
        "Team created successfully",
        team,
    ))
}

/// Get a team by id
#[utoipa::path(
    get,
    path = "/api/equipos/{id}/",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    responses(
        (status = 200, description = "Team found", body = ApiResponseDto<TeamDto>),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id?;

    let team = TeamService::new(&state.db).get(id).await?;

    Ok(api_response(StatusCode::OK, "Team retrieved", team))
}

/// List teams one page at a time, ordered by id
#[utoipa::path(
    get,
    path = "/api/equipos/all/",
    tag = TEAM_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of teams", body = ApiResponseDto<PageDto<TeamDto>>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_teams(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, Error> {
    let pagination = Pagination::from_params(&params)?;

    let page = TeamService::new(&state.db).list(pagination).await?;

    Ok(api_response(StatusCode::OK, "Teams retrieved", page))
}

/// Find a team by its exact name
#[utoipa::path(
    get,
    path = "/api/equipos/search/{name}/",
    tag = TEAM_TAG,
    params(("name" = String, Path, description = "Exact, case-sensitive team name")),
    responses(
        (status = 200, description = "Team found", body = ApiResponseDto<TeamDto>),
        (status = 404, description = "No team with this name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_team(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(name) = name?;

    let team = TeamService::new(&state.db).search_by_name(&name).await?;

    Ok(api_response(StatusCode::OK, "Team retrieved", team))
}

/// Partially update a team
///
/// Omitted fields keep their stored value. An empty `image` removes the stored image.
#[utoipa::path(
    patch,
    path = "/api/equipos/{id}/update/",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    request_body = UpdateTeamDto,
    responses(
        (status = 200, description = "Team updated", body = ApiResponseDto<TeamDto>),
        (status = 400, description = "Validation errors", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateTeamDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let team = TeamService::new(&state.db).update(id, payload).await?;

    Ok(api_response(StatusCode::OK, "Team updated successfully", team))
}

/// Deactivate a team
///
/// Fails while any match, local or visitor, references the team.
#[utoipa::path(
    delete,
    path = "/api/equipos/{id}/delete/",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    responses(
        (status = 200, description = "Team deactivated", body = ApiResponseDto<TeamDto>),
        (status = 400, description = "Team already inactive or referenced by matches", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id?;

    let team = TeamService::new(&state.db).deactivate(id).await?;

    Ok(api_response(
        StatusCode::OK,
        "Team deactivated successfully",
        team,
    ))
}

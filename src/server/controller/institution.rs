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
        institution::{CreateInstitutionDto, InstitutionDto, UpdateInstitutionDto},
    },
    server::{
        controller::util::response::api_response,
        error::Error,
        model::{
            app::AppState,
            pagination::{Pagination, PaginationParams},
        },
        service::institution::InstitutionService,
    },
};

pub static INSTITUTION_TAG: &str = "instituciones";

/// Create an institution
#[utoipa::path(
    post,
    path = "/api/instituciones/",
    tag = INSTITUTION_TAG,
    request_body = CreateInstitutionDto,
    responses(
        (status = 201, description = "Institution created", body = ApiResponseDto<InstitutionDto>),
        (status = 400, description = "Validation errors", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_institution(
    State(state): State<AppState>,
    payload: Result<Json<CreateInstitutionDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let institution = InstitutionService::new(&state.db).create(payload).await?;

    Ok(api_response(
        StatusCode::CREATED,
        "Institution created successfully",
        institution,
    ))
}

/// Get an institution by id
#[utoipa::path(
    get,
    path = "/api/instituciones/{id}/",
    tag = INSTITUTION_TAG,
    params(("id" = i32, Path, description = "Institution id")),
    responses(
        (status = 200, description = "Institution found", body = ApiResponseDto<InstitutionDto>),
        (status = 404, description = "Institution not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_institution(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id?;

    let institution = InstitutionService::new(&state.db).get(id).await?;

    Ok(api_response(StatusCode::OK, "Institution retrieved", institution))
}

/// List institutions one page at a time, ordered by id
#[utoipa::path(
    get,
    path = "/api/instituciones/all/",
    tag = INSTITUTION_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of institutions", body = ApiResponseDto<PageDto<InstitutionDto>>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_institutions(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, Error> {
    let pagination = Pagination::from_params(&params)?;

    let page = InstitutionService::new(&state.db).list(pagination).await?;

    Ok(api_response(StatusCode::OK, "Institutions retrieved", page))
}

/// Partially update an institution
#[utoipa::path(
    patch,
    path = "/api/instituciones/{id}/update/",
    tag = INSTITUTION_TAG,
    params(("id" = i32, Path, description = "Institution id")),
    request_body = UpdateInstitutionDto,
    responses(
        (status = 200, description = "Institution updated", body = ApiResponseDto<InstitutionDto>),
        (status = 400, description = "Validation errors", body = ErrorDto),
        (status = 404, description = "Institution not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_institution(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateInstitutionDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let institution = InstitutionService::new(&state.db).update(id, payload).await?;

    Ok(api_response(StatusCode::OK, "Institution updated successfully", institution))
}

/// Deactivate an institution
///
/// Teams owned by the institution are left untouched.
#[utoipa::path(
    delete,
    path = "/api/instituciones/{id}/delete/",
    tag = INSTITUTION_TAG,
    params(("id" = i32, Path, description = "Institution id")),
    responses(
        (status = 200, description = "Institution deactivated", body = ApiResponseDto<InstitutionDto>),
        (status = 400, description = "Institution already inactive", body = ErrorDto),
        (status = 404, description = "Institution not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_institution(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id?;

    let institution = InstitutionService::new(&state.db).deactivate(id).await?;

    Ok(api_response(
        StatusCode::OK,
        "Institution deactivated successfully",
        institution,
    ))
}

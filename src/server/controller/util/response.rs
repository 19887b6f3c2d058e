use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::model::api::ApiResponseDto;

/// Wraps a payload in the response envelope shared by every endpoint.
pub fn api_response<T: Serialize>(
    status: StatusCode,
    message: impl Into<String>,
    data: T,
) -> Response {
    (
        status,
        Json(ApiResponseDto {
            message: message.into(),
            data: Some(data),
            status: status.as_u16(),
        }),
    )
        .into_response()
}

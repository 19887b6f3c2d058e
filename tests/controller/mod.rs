//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, verifying status codes and the
//! response envelope for each resource.

mod institution;
mod team;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use torneo::{
    model::api::{ApiResponseDto, ErrorDto},
    server::model::{app::AppState, pagination::PaginationParams},
};
use torneo_test_utils::prelude::*;

use crate::util::body_json;

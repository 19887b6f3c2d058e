//! HTTP controller endpoints for the tournament scheduling API.
//!
//! One module per resource. Handlers extract the request, hand it to the matching service
//! and wrap the result in the response envelope; all rules live in the services and the
//! validation layer. Endpoints are annotated for utoipa so they appear in the OpenAPI document.

pub mod institution;
pub mod season;
pub mod team;
pub mod tournament;
pub mod tournament_match;
pub mod util;

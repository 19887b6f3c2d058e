//! API data transfer objects.
//!
//! Request payloads and response bodies shared by the HTTP controllers and the integration
//! tests. Every response body is wrapped in [`api::ApiResponseDto`].

pub mod api;
pub mod institution;
pub mod season;
pub mod team;
pub mod tournament;
pub mod tournament_match;

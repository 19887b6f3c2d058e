//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Every resource exposes the same six-verb surface under `/api/{resource}/`: create,
/// get by id, paginated listing at `all/`, partial update at `{id}/update/` and
/// deactivation (deletion for matches) at `{id}/delete/`. Teams additionally support an
/// exact-name lookup at `search/{name}/`.
///
/// # Resources
/// - `/api/instituciones/` - Institutions
/// - `/api/equipos/` - Teams
/// - `/api/temporadas/` - Seasons
/// - `/api/torneos/` - Tournaments
/// - `/api/partidos/` - Matches
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>` ready to be given its state and served.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Torneo", description = "Tournament scheduling API"), tags(
        (name = controller::institution::INSTITUTION_TAG, description = "Institution API routes"),
        (name = controller::team::TEAM_TAG, description = "Team API routes"),
        (name = controller::season::SEASON_TAG, description = "Season API routes"),
        (name = controller::tournament::TOURNAMENT_TAG, description = "Tournament API routes"),
        (name = controller::tournament_match::MATCH_TAG, description = "Match API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::institution::create_institution))
        .routes(routes!(controller::institution::get_institution))
        .routes(routes!(controller::institution::list_institutions))
        .routes(routes!(controller::institution::update_institution))
        .routes(routes!(controller::institution::delete_institution))
        .routes(routes!(controller::team::create_team))
        .routes(routes!(controller::team::get_team))
        .routes(routes!(controller::team::list_teams))
        .routes(routes!(controller::team::search_team))
        .routes(routes!(controller::team::update_team))
        .routes(routes!(controller::team::delete_team))
        .routes(routes!(controller::season::create_season))
        .routes(routes!(controller::season::get_season))
        .routes(routes!(controller::season::list_seasons))
        .routes(routes!(controller::season::update_season))
        .routes(routes!(controller::season::delete_season))
        .routes(routes!(controller::tournament::create_tournament))
        .routes(routes!(controller::tournament::get_tournament))
        .routes(routes!(controller::tournament::list_tournaments))
        .routes(routes!(controller::tournament::update_tournament))
        .routes(routes!(controller::tournament::delete_tournament))
        .routes(routes!(controller::tournament_match::create_match))
        .routes(routes!(controller::tournament_match::get_match))
        .routes(routes!(controller::tournament_match::list_matches))
        .routes(routes!(controller::tournament_match::update_match))
        .routes(routes!(controller::tournament_match::delete_match))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}

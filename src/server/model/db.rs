//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so signatures do not need to spell out the `entity` crate's
//! module paths.

/// Type alias for the institution database model.
///
/// # Fields (from `entity::institution::Model`)
/// - `id` - Primary key
/// - `name` - Unique institution name
/// - `active` - Soft-delete flag, true until the institution is deactivated
pub type InstitutionModel = entity::institution::Model;

/// Type alias for the team database model.
///
/// # Fields (from `entity::team::Model`)
/// - `id` - Primary key
/// - `institution_id` - Foreign key to the owning institution
/// - `name` - Globally unique team name
/// - `image` - Optional raw image bytes
/// - `active` - Soft-delete flag, true until the team is deactivated
pub type TeamModel = entity::team::Model;

/// Type alias for the season database model.
///
/// # Fields (from `entity::season::Model`)
/// - `id` - Primary key
/// - `name` - Unique season name
/// - `description` - Free text description
/// - `kind` - `Friendly` or `Official`
/// - `start_date` / `end_date` - Inclusive date range of the season
/// - `active` - Soft-delete flag, false until explicitly set on creation
pub type SeasonModel = entity::season::Model;

/// Type alias for the tournament database model.
///
/// # Fields (from `entity::tournament::Model`)
/// - `id` - Primary key
/// - `season_id` - Foreign key to the season containing the tournament
/// - `name` - Unique tournament name
/// - `description` - Free text description
/// - `start_date` / `end_date` - Inclusive date range, contained in the season's range
/// - `active` - Soft-delete flag, false until explicitly set on creation
pub type TournamentModel = entity::tournament::Model;

/// Type alias for the match database model.
///
/// # Fields (from `entity::tournament_match::Model`)
/// - `id` - Primary key
/// - `date` - Kick-off timestamp, contained in the tournament's range
/// - `local_score` / `visitor_score` - Null until the match is played
/// - `uploaded` - Lock flag, a locked match cannot be deleted
/// - `local_team_id` / `visitor_team_id` - The two distinct sides
/// - `tournament_id` / `season_id` - Independently stored parent references
pub type MatchModel = entity::tournament_match::Model;

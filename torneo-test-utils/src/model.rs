//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main torneo crate so fixture signatures read the same
//! way as the code under test.

pub type InstitutionModel = entity::institution::Model;
pub type TeamModel = entity::team::Model;
pub type SeasonModel = entity::season::Model;
pub type TournamentModel = entity::tournament::Model;
pub type MatchModel = entity::tournament_match::Model;

//! SeaORM entity models for the tournament scheduling schema.

pub mod prelude;

pub mod institution;
pub mod season;
pub mod team;
pub mod tournament;
pub mod tournament_match;

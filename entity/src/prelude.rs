pub use super::institution::Entity as Institution;
pub use super::season::Entity as Season;
pub use super::team::Entity as Team;
pub use super::tournament::Entity as Tournament;
pub use super::tournament_match::Entity as TournamentMatch;

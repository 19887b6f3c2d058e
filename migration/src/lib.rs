pub use sea_orm_migration::prelude::*;

mod m20251101_000001_institution;
mod m20251101_000002_team;
mod m20251101_000003_season;
mod m20251101_000004_tournament;
mod m20251101_000005_tournament_match;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_institution::Migration),
            Box::new(m20251101_000002_team::Migration),
            Box::new(m20251101_000003_season::Migration),
            Box::new(m20251101_000004_tournament::Migration),
            Box::new(m20251101_000005_tournament_match::Migration),
        ]
    }
}

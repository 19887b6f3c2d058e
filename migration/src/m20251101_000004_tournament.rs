use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_season::Season;

static IDX_TOURNAMENT_SEASON_ID: &str = "idx-tournament-season_id";
static FK_TOURNAMENT_SEASON_ID: &str = "fk-tournament-season_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tournament::Table)
                    .if_not_exists()
                    .col(pk_auto(Tournament::Id))
                    .col(integer(Tournament::SeasonId))
                    .col(string_uniq(Tournament::Name))
                    .col(string(Tournament::Description))
                    .col(timestamp(Tournament::StartDate))
                    .col(timestamp(Tournament::EndDate))
                    .col(boolean(Tournament::Active).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TOURNAMENT_SEASON_ID)
                            .from(Tournament::Table, Tournament::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TOURNAMENT_SEASON_ID)
                    .table(Tournament::Table)
                    .col(Tournament::SeasonId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TOURNAMENT_SEASON_ID)
                    .table(Tournament::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Tournament::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Tournament {
    Table,
    Id,
    SeasonId,
    Name,
    Description,
    StartDate,
    EndDate,
    Active,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_institution::Institution;

static IDX_TEAM_INSTITUTION_ID: &str = "idx-team-institution_id";
static FK_TEAM_INSTITUTION_ID: &str = "fk-team-institution_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(integer(Team::InstitutionId))
                    .col(string_uniq(Team::Name))
                    .col(blob_null(Team::Image))
                    .col(boolean(Team::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TEAM_INSTITUTION_ID)
                            .from(Team::Table, Team::InstitutionId)
                            .to(Institution::Table, Institution::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_INSTITUTION_ID)
                    .table(Team::Table)
                    .col(Team::InstitutionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_INSTITUTION_ID)
                    .table(Team::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    InstitutionId,
    Name,
    Image,
    Active,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000002_team::Team, m20251101_000003_season::Season,
    m20251101_000004_tournament::Tournament,
};

static IDX_TOURNAMENT_MATCH_DATE: &str = "idx-tournament_match-date";
static IDX_TOURNAMENT_MATCH_TOURNAMENT_ID: &str = "idx-tournament_match-tournament_id";
static IDX_TOURNAMENT_MATCH_SEASON_ID: &str = "idx-tournament_match-season_id";
static FK_TOURNAMENT_MATCH_LOCAL_TEAM_ID: &str = "fk-tournament_match-local_team_id";
static FK_TOURNAMENT_MATCH_VISITOR_TEAM_ID: &str = "fk-tournament_match-visitor_team_id";
static FK_TOURNAMENT_MATCH_TOURNAMENT_ID: &str = "fk-tournament_match-tournament_id";
static FK_TOURNAMENT_MATCH_SEASON_ID: &str = "fk-tournament_match-season_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TournamentMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(TournamentMatch::Id))
                    .col(timestamp(TournamentMatch::Date))
                    .col(integer_null(TournamentMatch::LocalScore))
                    .col(integer_null(TournamentMatch::VisitorScore))
                    .col(boolean(TournamentMatch::Uploaded).default(false))
                    .col(integer(TournamentMatch::LocalTeamId))
                    .col(integer(TournamentMatch::VisitorTeamId))
                    .col(integer(TournamentMatch::TournamentId))
                    .col(integer(TournamentMatch::SeasonId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TOURNAMENT_MATCH_LOCAL_TEAM_ID)
                            .from(TournamentMatch::Table, TournamentMatch::LocalTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TOURNAMENT_MATCH_VISITOR_TEAM_ID)
                            .from(TournamentMatch::Table, TournamentMatch::VisitorTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TOURNAMENT_MATCH_TOURNAMENT_ID)
                            .from(TournamentMatch::Table, TournamentMatch::TournamentId)
                            .to(Tournament::Table, Tournament::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TOURNAMENT_MATCH_SEASON_ID)
                            .from(TournamentMatch::Table, TournamentMatch::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TOURNAMENT_MATCH_DATE)
                    .table(TournamentMatch::Table)
                    .col(TournamentMatch::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TOURNAMENT_MATCH_TOURNAMENT_ID)
                    .table(TournamentMatch::Table)
                    .col(TournamentMatch::TournamentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TOURNAMENT_MATCH_SEASON_ID)
                    .table(TournamentMatch::Table)
                    .col(TournamentMatch::SeasonId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for index in [
            IDX_TOURNAMENT_MATCH_SEASON_ID,
            IDX_TOURNAMENT_MATCH_TOURNAMENT_ID,
            IDX_TOURNAMENT_MATCH_DATE,
        ] {
            manager
                .drop_index(
                    Index::drop()
                        .name(index)
                        .table(TournamentMatch::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(TournamentMatch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TournamentMatch {
    Table,
    Id,
    Date,
    LocalScore,
    VisitorScore,
    Uploaded,
    LocalTeamId,
    VisitorTeamId,
    TournamentId,
    SeasonId,
}

use sea_orm::entity::prelude::*;

/// A fixture between two teams inside a tournament.
///
/// The season is stored alongside the tournament rather than derived from it, both
/// references are supplied by the caller and validated independently.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tournament_match")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub date: DateTime,
    pub local_score: Option<i32>,
    pub visitor_score: Option<i32>,
    /// Set once the match has been finalized, blocks deletion while true.
    pub uploaded: bool,
    pub local_team_id: i32,
    pub visitor_team_id: i32,
    pub tournament_id: i32,
    pub season_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::LocalTeamId",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    LocalTeam,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::VisitorTeamId",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    VisitorTeam,
    #[sea_orm(
        belongs_to = "super::tournament::Entity",
        from = "Column::TournamentId",
        to = "super::tournament::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Tournament,
    #[sea_orm(
        belongs_to = "super::season::Entity",
        from = "Column::SeasonId",
        to = "super::season::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Season,
}

impl Related<super::tournament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tournament.def()
    }
}

impl Related<super::season::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Season.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

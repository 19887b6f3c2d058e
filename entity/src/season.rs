use sea_orm::entity::prelude::*;

/// A time-boxed competition cycle containing tournaments and matches.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "season")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
    /// Either `Friendly` or `Official`.
    pub kind: String,
    pub start_date: DateTime,
    pub end_date: DateTime,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tournament::Entity")]
    Tournament,
    #[sea_orm(has_many = "super::tournament_match::Entity")]
    TournamentMatch,
}

impl Related<super::tournament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tournament.def()
    }
}

impl Related<super::tournament_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TournamentMatch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

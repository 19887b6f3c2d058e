use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDateTime;
use entity::tournament_match::Column;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{db::MatchModel, pagination::Pagination},
    validation::tournament_match::ValidMatch,
};

/// Names of the teams, tournaments and seasons referenced by a set of matches, keyed by id.
#[derive(Debug, Default)]
pub struct MatchNames {
    pub teams: HashMap<i32, String>,
    pub tournaments: HashMap<i32, String>,
    pub seasons: HashMap<i32, String>,
}

pub struct MatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchRepository<'a, C> {
    /// Creates a new instance of [`MatchRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, tournament_match: ValidMatch) -> Result<MatchModel, DbErr> {
        let tournament_match = entity::tournament_match::ActiveModel {
            date: ActiveValue::Set(tournament_match.date),
            local_score: ActiveValue::Set(tournament_match.local_score),
            visitor_score: ActiveValue::Set(tournament_match.visitor_score),
            uploaded: ActiveValue::Set(tournament_match.uploaded),
            local_team_id: ActiveValue::Set(tournament_match.local_team_id),
            visitor_team_id: ActiveValue::Set(tournament_match.visitor_team_id),
            tournament_id: ActiveValue::Set(tournament_match.tournament_id),
            season_id: ActiveValue::Set(tournament_match.season_id),
            ..Default::default()
        };

        tournament_match.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<MatchModel>, DbErr> {
        entity::prelude::TournamentMatch::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Returns one page of matches ordered by id along with the total count
    pub async fn get_page(&self, pagination: Pagination) -> Result<(Vec<MatchModel>, u64), DbErr> {
        let paginator = entity::prelude::TournamentMatch::find()
            .order_by_asc(Column::Id)
            .paginate(self.db, pagination.offset);

        let count = paginator.num_items().await?;
        let matches = paginator.fetch_page(pagination.page_index()).await?;

        Ok((matches, count))
    }

    /// Loads the names of every team, tournament and season the matches reference
    ///
    /// Issues one query per referenced table regardless of the number of matches.
    pub async fn get_related_names(&self, matches: &[MatchModel]) -> Result<MatchNames, DbErr> {
        if matches.is_empty() {
            return Ok(MatchNames::default());
        }

        let team_ids: BTreeSet<i32> = matches
            .iter()
            .flat_map(|m| [m.local_team_id, m.visitor_team_id])
            .collect();
        let tournament_ids: BTreeSet<i32> = matches.iter().map(|m| m.tournament_id).collect();
        let season_ids: BTreeSet<i32> = matches.iter().map(|m| m.season_id).collect();

        let teams = entity::prelude::Team::find()
            .filter(entity::team::Column::Id.is_in(team_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|team| (team.id, team.name))
            .collect();
        let tournaments = entity::prelude::Tournament::find()
            .filter(entity::tournament::Column::Id.is_in(tournament_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|tournament| (tournament.id, tournament.name))
            .collect();
        let seasons = entity::prelude::Season::find()
            .filter(entity::season::Column::Id.is_in(season_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|season| (season.id, season.name))
            .collect();

        Ok(MatchNames {
            teams,
            tournaments,
            seasons,
        })
    }

    pub async fn update(
        &self,
        tournament_match: MatchModel,
        changes: ValidMatch,
    ) -> Result<MatchModel, DbErr> {
        let mut match_am = tournament_match.into_active_model();
        match_am.date = ActiveValue::Set(changes.date);
        match_am.local_score = ActiveValue::Set(changes.local_score);
        match_am.visitor_score = ActiveValue::Set(changes.visitor_score);
        match_am.uploaded = ActiveValue::Set(changes.uploaded);
        match_am.local_team_id = ActiveValue::Set(changes.local_team_id);
        match_am.visitor_team_id = ActiveValue::Set(changes.visitor_team_id);
        match_am.tournament_id = ActiveValue::Set(changes.tournament_id);
        match_am.season_id = ActiveValue::Set(changes.season_id);

        match_am.update(self.db).await
    }

    /// Deletes a match
    ///
    /// Returns OK regardless of the match existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TournamentMatch::delete_by_id(id)
            .exec(self.db)
            .await
    }

    /// Finds matches scheduled at exactly `date` in which any of `team_ids` plays on either side
    ///
    /// # Arguments
    /// - `date` - Timestamp to compare for equality
    /// - `team_ids` - Teams of the candidate match, an empty slice yields no conflicts
    /// - `exclude_id` - Match being updated, never reported as conflicting with itself
    pub async fn find_schedule_conflicts(
        &self,
        date: NaiveDateTime,
        team_ids: &[i32],
        exclude_id: Option<i32>,
    ) -> Result<Vec<MatchModel>, DbErr> {
        if team_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = entity::prelude::TournamentMatch::find()
            .filter(Column::Date.eq(date))
            .filter(
                Condition::any()
                    .add(Column::LocalTeamId.is_in(team_ids.iter().copied()))
                    .add(Column::VisitorTeamId.is_in(team_ids.iter().copied())),
            );

        if let Some(exclude_id) = exclude_id {
            query = query.filter(Column::Id.ne(exclude_id));
        }

        query.order_by_asc(Column::Id).all(self.db).await
    }

    /// Checks whether the team plays in any match, as local or visitor
    pub async fn exists_for_team(&self, team_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::TournamentMatch::find()
            .filter(
                Condition::any()
                    .add(Column::LocalTeamId.eq(team_id))
                    .add(Column::VisitorTeamId.eq(team_id)),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn exists_for_tournament(&self, tournament_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::TournamentMatch::find()
            .filter(Column::TournamentId.eq(tournament_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn exists_for_season(&self, season_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::TournamentMatch::find()
            .filter(Column::SeasonId.eq(season_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

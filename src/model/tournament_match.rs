use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MatchDto {
    pub id: i32,
    pub date: NaiveDateTime,
    pub local_score: Option<i32>,
    pub visitor_score: Option<i32>,
    /// Finalized matches cannot be deleted
    pub uploaded: bool,
    pub local_team_id: i32,
    pub local_team_name: Option<String>,
    pub visitor_team_id: i32,
    pub visitor_team_name: Option<String>,
    pub tournament_id: i32,
    pub tournament_name: Option<String>,
    pub season_id: i32,
    pub season_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateMatchDto {
    pub date: Option<NaiveDateTime>,
    pub local_score: Option<i32>,
    pub visitor_score: Option<i32>,
    pub uploaded: Option<bool>,
    pub local_team_id: Option<i32>,
    pub visitor_team_id: Option<i32>,
    pub tournament_id: Option<i32>,
    pub season_id: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateMatchDto {
    pub date: Option<NaiveDateTime>,
    pub local_score: Option<i32>,
    pub visitor_score: Option<i32>,
    pub uploaded: Option<bool>,
    pub local_team_id: Option<i32>,
    pub visitor_team_id: Option<i32>,
    pub tournament_id: Option<i32>,
    pub season_id: Option<i32>,
}

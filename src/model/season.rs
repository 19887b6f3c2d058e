use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Whether the results of a season count towards official standings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SeasonKind {
    Friendly,
    Official,
}

impl SeasonKind {
    pub const ALL: [SeasonKind; 2] = [SeasonKind::Friendly, SeasonKind::Official];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Friendly => "Friendly",
            Self::Official => "Official",
        }
    }
}

impl fmt::Display for SeasonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeasonKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SeasonDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub kind: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub active: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateSeasonDto {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Either `Friendly` or `Official`
    pub kind: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    /// Initial state, seasons are created inactive unless set
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateSeasonDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub kind: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

use std::fmt;

/// The record types managed by the API, used to label errors and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Institution,
    Team,
    Season,
    Tournament,
    Match,
}

impl EntityKind {
    /// Lowercase plural noun, e.g. `matches`.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Institution => "institutions",
            Self::Team => "teams",
            Self::Season => "seasons",
            Self::Tournament => "tournaments",
            Self::Match => "matches",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Institution => "Institution",
            Self::Team => "Team",
            Self::Season => "Season",
            Self::Tournament => "Tournament",
            Self::Match => "Match",
        };

        f.write_str(label)
    }
}

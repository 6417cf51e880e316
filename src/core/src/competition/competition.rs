use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub type CompetitionId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompetitionKind {
    League,
    Cup,
    Friendly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    pub id: CompetitionId,
    pub name: String,
    pub short_name: String,
    pub kind: CompetitionKind,
    /// Lower is higher tier.
    pub ranking: u8,
    /// Club count a league is filled to when clubs are first allocated.
    pub required_clubs: usize,
}

impl Competition {
    pub fn new(
        id: CompetitionId,
        name: String,
        short_name: String,
        kind: CompetitionKind,
        ranking: u8,
        required_clubs: usize,
    ) -> Self {
        Competition {
            id,
            name,
            short_name,
            kind,
            ranking,
            required_clubs,
        }
    }

    pub fn league(id: CompetitionId, name: &str, short_name: &str, ranking: u8, required_clubs: usize) -> Self {
        Self::new(
            id,
            name.to_string(),
            short_name.to_string(),
            CompetitionKind::League,
            ranking,
            required_clubs,
        )
    }

    pub fn cup(id: CompetitionId, name: &str, short_name: &str, ranking: u8) -> Self {
        Self::new(
            id,
            name.to_string(),
            short_name.to_string(),
            CompetitionKind::Cup,
            ranking,
            0,
        )
    }

    pub fn is_league(&self) -> bool {
        self.kind == CompetitionKind::League
    }

    pub fn is_cup(&self) -> bool {
        self.kind == CompetitionKind::Cup
    }
}

impl Display for Competition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) [{:?}]", self.name, self.short_name, self.kind)
    }
}

/// Leagues ordered from the top tier down.
pub fn league_chain(competitions: &[Competition]) -> Vec<&Competition> {
    let mut leagues: Vec<&Competition> = competitions.iter().filter(|c| c.is_league()).collect();

    leagues.sort_by_key(|c| (c.ranking, c.id));

    leagues
}

use crate::club::ClubId;
use crate::competition::CompetitionId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A scheduled match. Home side first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fixture {
    pub competition_id: CompetitionId,
    /// 1-based, continuous across both halves of a double round-robin.
    pub round: u16,
    pub home_club_id: ClubId,
    pub away_club_id: ClubId,
}

impl Fixture {
    pub fn new(competition_id: CompetitionId, round: u16, home_club_id: ClubId, away_club_id: ClubId) -> Self {
        Fixture {
            competition_id,
            round,
            home_club_id,
            away_club_id,
        }
    }

    pub fn involves(&self, club_id: ClubId) -> bool {
        self.home_club_id == club_id || self.away_club_id == club_id
    }
}

impl Display for Fixture {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{} Rnd {}] {} vs {}",
            self.competition_id, self.round, self.home_club_id, self.away_club_id
        )
    }
}

use crate::club::ClubId;
use crate::r#match::Fixture;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}

impl Score {
    pub fn new(home: u8, away: u8) -> Self {
        Score { home, away }
    }

    pub fn outcome(&self) -> MatchOutcome {
        match self.home.cmp(&self.away) {
            std::cmp::Ordering::Greater => MatchOutcome::HomeWin,
            std::cmp::Ordering::Less => MatchOutcome::AwayWin,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    HomeWin,
    Draw,
    AwayWin,
}

/// A played fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchResult {
    pub fixture: Fixture,
    pub score: Score,
}

impl MatchResult {
    pub fn new(fixture: Fixture, score: Score) -> Self {
        MatchResult { fixture, score }
    }

    /// Goals (scored, conceded) from the club's side, if it played.
    pub fn goals_for(&self, club_id: ClubId) -> Option<(u8, u8)> {
        if self.fixture.home_club_id == club_id {
            Some((self.score.home, self.score.away))
        } else if self.fixture.away_club_id == club_id {
            Some((self.score.away, self.score.home))
        } else {
            None
        }
    }
}

impl Display for MatchResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{} Rnd {}] {} {}-{} {}",
            self.fixture.competition_id,
            self.fixture.round,
            self.fixture.home_club_id,
            self.score.home,
            self.score.away,
            self.fixture.away_club_id
        )
    }
}

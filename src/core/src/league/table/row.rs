use crate::club::ClubId;
use crate::r#match::{MatchOutcome, MatchResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const POINTS_FOR_WIN: u16 = 3;
pub const POINTS_FOR_DRAW: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTableRow {
    pub club_id: ClubId,
    pub club_name: String,
    pub played: u16,
    pub won: u16,
    pub drawn: u16,
    pub lost: u16,
    pub goals_for: u16,
    pub goals_against: u16,
    pub points: u16,
}

impl LeagueTableRow {
    pub fn new(club_id: ClubId, club_name: String) -> Self {
        LeagueTableRow {
            club_id,
            club_name,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    pub fn goal_difference(&self) -> i32 {
        self.goals_for as i32 - self.goals_against as i32
    }

    /// Counts `result` from this club's side. Returns false if the club
    /// did not play in it.
    pub(crate) fn record(&mut self, result: &MatchResult) -> bool {
        let Some((scored, conceded)) = result.goals_for(self.club_id) else {
            return false;
        };

        self.played += 1;
        self.goals_for += scored as u16;
        self.goals_against += conceded as u16;

        let at_home = result.fixture.home_club_id == self.club_id;

        match (result.score.outcome(), at_home) {
            (MatchOutcome::Draw, _) => {
                self.drawn += 1;
                self.points += POINTS_FOR_DRAW;
            }
            (MatchOutcome::HomeWin, true) | (MatchOutcome::AwayWin, false) => {
                self.won += 1;
                self.points += POINTS_FOR_WIN;
            }
            _ => self.lost += 1,
        }

        true
    }

    /// Table order: points, goal difference, goals scored, then name.
    /// Club id settles clubs sharing a name.
    pub fn ranking_cmp(&self, other: &Self) -> Ordering {
        other
            .points
            .cmp(&self.points)
            .then_with(|| other.goal_difference().cmp(&self.goal_difference()))
            .then_with(|| other.goals_for.cmp(&self.goals_for))
            .then_with(|| self.club_name.cmp(&other.club_name))
            .then_with(|| self.club_id.cmp(&other.club_id))
    }
}

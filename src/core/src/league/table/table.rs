use crate::club::{Club, ClubId};
use crate::competition::CompetitionId;
use crate::league::LeagueTableRow;
use crate::r#match::MatchResult;
use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Standings of one competition, always rebuilt from the full result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTable {
    pub competition_id: CompetitionId,
    pub rows: Vec<LeagueTableRow>,
}

impl LeagueTable {
    /// Every registered club gets a row, played or not. Results of other
    /// competitions, and sides that are not registered, are skipped.
    pub fn compute<'r, I>(competition_id: CompetitionId, clubs: &[&Club], results: I) -> Self
    where
        I: IntoIterator<Item = &'r MatchResult>,
    {
        let mut rows: Vec<LeagueTableRow> = clubs
            .iter()
            .map(|club| LeagueTableRow::new(club.id, club.name.clone()))
            .collect();

        let positions: HashMap<ClubId, usize> = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| (row.club_id, idx))
            .collect();

        for result in results
            .into_iter()
            .filter(|result| result.fixture.competition_id == competition_id)
        {
            let fixture = &result.fixture;

            for club_id in [fixture.home_club_id, fixture.away_club_id] {
                let recorded = positions
                    .get(&club_id)
                    .is_some_and(|idx| rows[*idx].record(result));

                if !recorded {
                    trace!(
                        "competition {}: club {} not registered, skipping",
                        competition_id, club_id
                    );
                }
            }
        }

        rows.sort_by(LeagueTableRow::ranking_cmp);

        LeagueTable {
            competition_id,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn leader(&self) -> Option<&LeagueTableRow> {
        self.rows.first()
    }

    /// 1-based.
    pub fn position(&self, club_id: ClubId) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.club_id == club_id)
            .map(|idx| idx + 1)
    }

    pub fn top(&self, count: usize) -> Vec<ClubId> {
        self.rows.iter().take(count).map(|row| row.club_id).collect()
    }

    pub fn bottom(&self, count: usize) -> Vec<ClubId> {
        let skip = self.rows.len().saturating_sub(count);

        self.rows.iter().skip(skip).map(|row| row.club_id).collect()
    }
}

impl Display for LeagueTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:>3} {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>5} {:>4}",
            "#", "Club", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
        )?;

        for (idx, row) in self.rows.iter().enumerate() {
            writeln!(
                f,
                "{:>3} {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+5} {:>4}",
                idx + 1,
                row.club_name,
                row.played,
                row.won,
                row.drawn,
                row.lost,
                row.goals_for,
                row.goals_against,
                row.goal_difference(),
                row.points
            )?;
        }

        Ok(())
    }
}

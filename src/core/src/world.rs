use crate::club::{Club, ClubId};
use crate::competition::{league_chain, Competition, CompetitionId, CompetitionRegistrations};
use crate::context::WorldTime;
use crate::league::LeagueTable;
use crate::season::Season;
use crate::storage::SeasonStore;
use crate::{SimulationError, SimulationResult};
use serde::{Deserialize, Serialize};

/// Aggregate root: the clock, the live season, archived seasons and the
/// club and competition pools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    pub seed: u64,
    pub time: WorldTime,
    pub current_season: Option<Season>,
    /// Oldest first.
    pub previous_seasons: Vec<Season>,
    pub clubs: Vec<Club>,
    pub competitions: Vec<Competition>,
    /// Registrations waiting for the next season to be created.
    pub next_registrations: Option<CompetitionRegistrations>,
}

impl World {
    pub fn new(
        seed: u64,
        clubs: Vec<Club>,
        competitions: Vec<Competition>,
        registrations: CompetitionRegistrations,
    ) -> Self {
        World {
            seed,
            time: WorldTime::start(),
            current_season: None,
            previous_seasons: Vec::new(),
            clubs,
            competitions,
            next_registrations: Some(registrations),
        }
    }

    pub fn club(&self, club_id: ClubId) -> Option<&Club> {
        self.clubs.iter().find(|club| club.id == club_id)
    }

    pub fn competition(&self, competition_id: CompetitionId) -> Option<&Competition> {
        self.competitions.iter().find(|c| c.id == competition_id)
    }

    /// Leagues, highest tier first.
    pub fn leagues(&self) -> Vec<&Competition> {
        league_chain(&self.competitions)
    }

    pub fn current_season(&self) -> SimulationResult<&Season> {
        self.current_season
            .as_ref()
            .ok_or_else(|| SimulationError::unavailable("no current season"))
    }

    pub fn current_season_mut(&mut self) -> SimulationResult<&mut Season> {
        self.current_season
            .as_mut()
            .ok_or_else(|| SimulationError::unavailable("no current season"))
    }

    pub fn season(&self, year: u16) -> Option<&Season> {
        self.current_season
            .iter()
            .chain(self.previous_seasons.iter())
            .find(|season| season.year == year)
    }

    /// Table of a competition in the current or an archived season.
    pub fn standings(&self, year: u16, competition_id: CompetitionId) -> SimulationResult<LeagueTable> {
        if self.competition(competition_id).is_none() {
            return Err(SimulationError::unavailable(format!(
                "competition {} does not exist",
                competition_id
            )));
        }

        SeasonStore::table(self, competition_id, year, &self.clubs)
    }
}

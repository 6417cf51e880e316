use crate::club::{Club, ClubId};
use crate::competition::{Competition, CompetitionId, CompetitionRegistrations};
use crate::context::WorldTime;
use crate::league::LeagueTable;
use crate::r#match::MatchResult;
use crate::season::Season;
use crate::world::World;
use crate::{SimulationError, SimulationResult};

/// What the engine needs from whatever keeps seasons around.
pub trait SeasonStore {
    fn registered_clubs(&self, competition_id: CompetitionId, year: u16) -> SimulationResult<Vec<ClubId>>;

    /// Results of a competition in a season, optionally only those a club played in.
    fn results(
        &self,
        competition_id: CompetitionId,
        club_id: Option<ClubId>,
        year: u16,
    ) -> SimulationResult<Vec<MatchResult>>;

    /// Records results of the current season's `week`.
    fn record_results(&mut self, week: u8, results: &[MatchResult]) -> SimulationResult<()>;

    fn current_week(&self) -> WorldTime;

    fn set_current_week(&mut self, time: WorldTime);

    /// Makes `season` current, archiving the previous one.
    fn append_season(&mut self, season: Season);

    /// Standings of a competition in `year`, rebuilt from the stored
    /// registrations and results. `clubs` supplies the names.
    fn table(&self, competition_id: CompetitionId, year: u16, clubs: &[Club]) -> SimulationResult<LeagueTable> {
        let registered = self
            .registered_clubs(competition_id, year)?
            .into_iter()
            .map(|club_id| {
                clubs.iter().find(|club| club.id == club_id).ok_or_else(|| {
                    SimulationError::unavailable(format!(
                        "club {} registered in competition {} is unknown",
                        club_id, competition_id
                    ))
                })
            })
            .collect::<SimulationResult<Vec<&Club>>>()?;

        let results = self.results(competition_id, None, year)?;

        Ok(LeagueTable::compute(competition_id, &registered, &results))
    }

    /// Registrations of `competitions` as stored for `year`.
    fn season_registrations(
        &self,
        competitions: &[Competition],
        year: u16,
    ) -> SimulationResult<CompetitionRegistrations> {
        let mut registrations = CompetitionRegistrations::new();

        for competition in competitions {
            registrations.register_all(competition.id, &self.registered_clubs(competition.id, year)?);
        }

        Ok(registrations)
    }
}

impl SeasonStore for World {
    fn registered_clubs(&self, competition_id: CompetitionId, year: u16) -> SimulationResult<Vec<ClubId>> {
        self.season(year)
            .map(|season| season.registrations.clubs(competition_id).to_vec())
            .ok_or_else(|| SimulationError::unavailable(format!("no season for year {}", year)))
    }

    fn results(
        &self,
        competition_id: CompetitionId,
        club_id: Option<ClubId>,
        year: u16,
    ) -> SimulationResult<Vec<MatchResult>> {
        let season = self
            .season(year)
            .ok_or_else(|| SimulationError::unavailable(format!("no season for year {}", year)))?;

        Ok(season
            .calendar
            .results_for_competition(competition_id)
            .into_iter()
            .filter(|result| club_id.is_none_or(|club_id| result.fixture.involves(club_id)))
            .collect())
    }

    fn record_results(&mut self, week: u8, results: &[MatchResult]) -> SimulationResult<()> {
        self.current_season_mut()?.calendar.record_results(week, results)
    }

    fn current_week(&self) -> WorldTime {
        self.time
    }

    fn set_current_week(&mut self, time: WorldTime) {
        self.time = time;
    }

    fn append_season(&mut self, season: Season) {
        if let Some(previous) = self.current_season.replace(season) {
            self.previous_seasons.push(previous);
        }
    }
}

use crate::competition::CompetitionId;
use crate::context::WorldTime;
use crate::league::{LeagueTable, PromotionEngine};
use crate::r#match::{Fixture, MatchResult, MatchResultSimulator, ScoreSampler, WeightedScoreSampler};
use crate::season::Season;
use crate::simulator::{SimulatorSettings, SimulatorSnapshot, WorldState};
use crate::storage::SeasonStore;
use crate::utils::Logging;
use crate::world::World;
use crate::{SimulationError, SimulationResult};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Drives one world through the season lifecycle. Every `advance` does the
/// work of the current state, then moves to the next one.
pub struct SimulatorEngine<S: ScoreSampler = WeightedScoreSampler, R: Rng = StdRng> {
    world: World,
    settings: SimulatorSettings,
    state: WorldState,
    simulator: MatchResultSimulator<S>,
    rng: R,
    current_fixtures: Vec<Fixture>,
    current_results: Vec<MatchResult>,
}

impl SimulatorEngine {
    /// Randomness is seeded from the world, so the same world replays the same way.
    pub fn new(world: World, settings: SimulatorSettings) -> Self {
        let rng = StdRng::seed_from_u64(world.seed);

        SimulatorEngine::with_parts(world, settings, WeightedScoreSampler::default(), rng)
    }
}

impl<S: ScoreSampler, R: Rng> SimulatorEngine<S, R> {
    /// The starting state is read off the world, so a saved world resumes
    /// where it stopped. A week that was mid-fixtures is replayed from its
    /// pending fixtures.
    pub fn with_parts(world: World, settings: SimulatorSettings, sampler: S, rng: R) -> Self {
        let state = Self::resume_state(&world);

        SimulatorEngine {
            world,
            settings,
            state,
            simulator: MatchResultSimulator::new(sampler),
            rng,
            current_fixtures: Vec::new(),
            current_results: Vec::new(),
        }
    }

    fn resume_state(world: &World) -> WorldState {
        if world.current_season.is_none() || world.next_registrations.is_some() {
            WorldState::NewSeason
        } else if world.current_week().is_last_week() {
            WorldState::PostSeason
        } else {
            WorldState::AwaitingContinue
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn into_world(self) -> World {
        self.world
    }

    pub fn settings(&self) -> &SimulatorSettings {
        &self.settings
    }

    pub fn state(&self) -> WorldState {
        self.state
    }

    pub fn time(&self) -> WorldTime {
        self.world.current_week()
    }

    pub fn current_fixtures(&self) -> &[Fixture] {
        &self.current_fixtures
    }

    pub fn current_results(&self) -> &[MatchResult] {
        &self.current_results
    }

    pub fn snapshot(&self) -> SimulatorSnapshot {
        SimulatorSnapshot {
            time: self.time(),
            state: self.state,
            fixtures: self.current_fixtures.clone(),
            results: self.current_results.clone(),
        }
    }

    /// Standings of a competition in the current season.
    pub fn table(&self, competition_id: CompetitionId) -> SimulationResult<LeagueTable> {
        let year = self.world.current_season()?.year;

        self.world.table(competition_id, year, &self.world.clubs)
    }

    pub fn advance(&mut self) -> SimulationResult<WorldState> {
        match self.state {
            WorldState::NewSeason => self.start_season()?,
            WorldState::AwaitingContinue => self.continue_week()?,
            WorldState::PreFixtures => self.state = WorldState::ProcessingFixtures,
            WorldState::ProcessingFixtures => self.process_fixtures()?,
            WorldState::PostFixtures => self.state = WorldState::AwaitingContinue,
            WorldState::PostSeason => self.finish_season()?,
        }

        Ok(self.state)
    }

    /// Moves the clock one week on. Only allowed while awaiting continue
    /// with nothing left to play this week.
    pub fn advance_week(&mut self) -> SimulationResult<()> {
        if self.state != WorldState::AwaitingContinue {
            return Err(SimulationError::invariant(format!(
                "cannot advance week in state '{}'",
                self.state
            )));
        }

        let mut time = self.world.current_week();

        if self.world.current_season()?.calendar.has_pending_fixtures(time.week())? {
            return Err(SimulationError::invariant(format!(
                "week {} still has fixtures to play",
                time.week()
            )));
        }

        time.advance_week();
        self.world.set_current_week(time);

        self.current_fixtures.clear();
        self.current_results.clear();

        debug!("advanced to {}", time);

        if time.is_last_week() {
            self.state = WorldState::PostSeason;
        }

        Ok(())
    }

    pub fn advance_to_post_season(&mut self) -> SimulationResult<()> {
        while self.state != WorldState::PostSeason {
            self.advance()?;
        }

        Ok(())
    }

    /// Advances until the week changes or the season ends.
    pub fn advance_to_new_week(&mut self) -> SimulationResult<()> {
        if matches!(self.state, WorldState::NewSeason | WorldState::PostSeason) {
            return Err(SimulationError::invariant(format!(
                "cannot advance to a new week in state '{}'",
                self.state
            )));
        }

        let start = self.world.current_week();

        while self.world.current_week() == start && self.state != WorldState::PostSeason {
            self.advance()?;
        }

        Ok(())
    }

    /// Plays a whole season from `NewSeason`, through promotion, back to
    /// `NewSeason`. Returns the year that was played.
    pub fn run_season(&mut self) -> SimulationResult<u16> {
        if self.state != WorldState::NewSeason {
            return Err(SimulationError::invariant(format!(
                "a season can only be run from '{}', not '{}'",
                WorldState::NewSeason,
                self.state
            )));
        }

        self.advance()?;

        let year = self.time().year();

        self.advance_to_post_season()?;
        self.advance()?;

        Ok(year)
    }

    fn start_season(&mut self) -> SimulationResult<()> {
        let registrations = self
            .world
            .next_registrations
            .clone()
            .ok_or_else(|| SimulationError::unavailable("no registrations for the next season"))?;

        let mut time = self.world.current_week();
        if self.world.current_season.is_some() {
            time.start_next_year();
        }

        let generator = self.settings.schedule_generator();
        let season = Logging::estimate_result(
            || Season::create(time.year(), &self.world.competitions, registrations, &generator, &mut self.rng),
            "season created",
        )?;

        info!("🚀 {}", season);

        self.world.next_registrations = None;
        self.world.set_current_week(time);
        self.world.append_season(season);

        self.current_fixtures.clear();
        self.current_results.clear();
        self.state = WorldState::AwaitingContinue;

        Ok(())
    }

    fn continue_week(&mut self) -> SimulationResult<()> {
        let week = self.world.current_week().week();
        let fixtures = self.world.current_season()?.calendar.fixtures_for_week(week)?;

        if fixtures.is_empty() {
            return self.advance_week();
        }

        self.current_fixtures = fixtures;
        self.current_results.clear();
        self.state = WorldState::PreFixtures;

        Ok(())
    }

    fn process_fixtures(&mut self) -> SimulationResult<()> {
        let week = self.world.current_week().week();
        let results = self.simulator.simulate_all(&self.current_fixtures, &mut self.rng);

        self.world.record_results(week, &results)?;

        debug!("week {}: {} fixtures played", week, results.len());

        self.current_results = results;
        self.state = WorldState::PostFixtures;

        Ok(())
    }

    fn finish_season(&mut self) -> SimulationResult<()> {
        let year = self.world.current_season()?.year;
        let leagues = self.world.leagues();

        let tables = leagues
            .iter()
            .map(|league| self.world.table(league.id, year, &self.world.clubs))
            .collect::<SimulationResult<Vec<LeagueTable>>>()?;

        for (league, table) in leagues.iter().zip(&tables) {
            if let Some(champion) = table.leader() {
                info!("🏆 {} {} champions: {} ({} pts)", year, league.name, champion.club_name, champion.points);
            }
        }

        let current = self.world.season_registrations(&self.world.competitions, year)?;
        let pool = current.unassigned_clubs(&self.world.clubs, &self.world.competitions);

        let movements = PromotionEngine::new(&self.settings.promotion).compute_movements(&tables, &pool, &mut self.rng)?;
        let next = PromotionEngine::apply(&movements, &current, &self.world.competitions, &mut self.rng);

        info!("season {} finished, {} clubs on the move", year, movements.len());

        self.world.next_registrations = Some(next);
        self.state = WorldState::NewSeason;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Club, ClubId, Squad};
    use crate::competition::{Competition, CompetitionRegistrations};
    use crate::league::ClubOrdering;
    use crate::r#match::Score;
    use std::collections::BTreeSet;

    struct HomeWin;

    impl ScoreSampler for HomeWin {
        fn sample<R: Rng + ?Sized>(&mut self, _fixture: &Fixture, _rng: &mut R) -> Score {
            Score::new(1, 0)
        }
    }

    fn competitions() -> Vec<Competition> {
        vec![
            Competition::league(1, "Premier League", "PL", 1, 4),
            Competition::league(2, "Championship", "CH", 2, 4),
            Competition::cup(3, "League Cup", "LC", 100),
        ]
    }

    fn world(seed: u64) -> World {
        let clubs: Vec<Club> = (1..=10)
            .map(|id| Club::new(id, format!("Club {:02}", id), Squad::new(100)))
            .collect();

        let mut rng = StdRng::seed_from_u64(seed);
        let registrations = CompetitionRegistrations::allocate_initial(&clubs, &competitions(), &mut rng).unwrap();

        World::new(seed, clubs, competitions(), registrations)
    }

    fn settings() -> SimulatorSettings {
        SimulatorSettings::builder()
            .promote_count(1)
            .relegate_count(1)
            .club_ordering(ClubOrdering::AsRegistered)
            .build()
            .unwrap()
    }

    fn engine(seed: u64) -> SimulatorEngine {
        SimulatorEngine::new(world(seed), settings())
    }

    #[test]
    fn test_new_season_schedules_fixtures() {
        let mut engine = engine(1);

        assert_eq!(engine.state(), WorldState::NewSeason);
        assert_eq!(engine.advance().unwrap(), WorldState::AwaitingContinue);

        let season = engine.world().current_season().unwrap();
        assert_eq!(season.year, 1);
        assert_eq!(season.pending_fixture_count(), 24);
        assert!(engine.world().next_registrations.is_none());
    }

    #[test]
    fn test_week_with_fixtures_visits_processing_states() {
        let mut engine = engine(2);
        engine.advance().unwrap();

        while engine.state() == WorldState::AwaitingContinue {
            engine.advance().unwrap();
        }

        assert_eq!(engine.state(), WorldState::PreFixtures);
        assert_eq!(engine.time().week(), 8);
        assert_eq!(engine.current_fixtures().len(), 4);
        assert!(engine.current_results().is_empty());

        assert_eq!(engine.advance().unwrap(), WorldState::ProcessingFixtures);
        assert_eq!(engine.advance().unwrap(), WorldState::PostFixtures);
        assert_eq!(engine.current_results().len(), 4);

        let snapshot = engine.snapshot();
        assert!(snapshot.has_match_results());
        assert_eq!(snapshot.state, WorldState::PostFixtures);

        assert_eq!(engine.advance().unwrap(), WorldState::AwaitingContinue);
        assert_eq!(engine.world().current_season().unwrap().result_count(), 4);

        engine.advance().unwrap();
        assert_eq!(engine.time().week(), 9);
        assert!(engine.current_fixtures().is_empty());
        assert!(engine.current_results().is_empty());
    }

    #[test]
    fn test_advance_week_only_when_awaiting_without_fixtures() {
        let mut engine = engine(3);

        assert!(matches!(engine.advance_week(), Err(SimulationError::InvariantViolation(_))));

        engine.advance().unwrap();
        for _ in 1..8 {
            engine.advance_week().unwrap();
        }
        assert_eq!(engine.time().week(), 8);

        assert!(matches!(engine.advance_week(), Err(SimulationError::InvariantViolation(_))));

        engine.advance().unwrap();
        assert_eq!(engine.state(), WorldState::PreFixtures);
        assert!(matches!(engine.advance_week(), Err(SimulationError::InvariantViolation(_))));
    }

    #[test]
    fn test_advance_to_new_week() {
        let mut engine = engine(4);

        assert!(matches!(engine.advance_to_new_week(), Err(SimulationError::InvariantViolation(_))));

        engine.advance().unwrap();
        engine.advance_to_new_week().unwrap();
        assert_eq!(engine.time().week(), 2);
        assert_eq!(engine.state(), WorldState::AwaitingContinue);
    }

    #[test]
    fn test_season_ends_in_week_fifty_two() {
        let mut engine = engine(5);
        engine.advance().unwrap();

        engine.advance_to_post_season().unwrap();

        assert_eq!(engine.state(), WorldState::PostSeason);
        assert!(engine.time().is_last_week());

        let season = engine.world().current_season().unwrap();
        assert!(season.is_complete());
        assert_eq!(season.result_count(), 24);

        for competition_id in [1, 2] {
            let table = engine.table(competition_id).unwrap();
            assert!(table.rows.iter().all(|row| row.played == 6));
        }

        assert!(matches!(engine.advance_to_new_week(), Err(SimulationError::InvariantViolation(_))));
    }

    #[test]
    fn test_post_season_moves_clubs_and_starts_next_year() {
        let mut engine = SimulatorEngine::with_parts(world(6), settings(), HomeWin, StdRng::seed_from_u64(6));

        engine.advance().unwrap();
        engine.advance_to_post_season().unwrap();

        let first = engine.world().current_season().unwrap().registrations.clone();
        let top = engine.table(1).unwrap();
        let bottom = engine.table(2).unwrap();

        assert_eq!(engine.advance().unwrap(), WorldState::NewSeason);

        let next = engine.world().next_registrations.clone().unwrap();
        assert!(next.is_registered(1, bottom.top(1)[0]));
        assert!(next.is_registered(2, top.bottom(1)[0]));
        assert!(!next.is_registered(2, bottom.bottom(1)[0]));

        let competitions = competitions();
        let clubs = engine.world().clubs.clone();
        assert_eq!(
            next.league_clubs(&competitions).len() + next.unassigned_clubs(&clubs, &competitions).len(),
            first.league_clubs(&competitions).len() + first.unassigned_clubs(&clubs, &competitions).len()
        );

        assert_eq!(engine.advance().unwrap(), WorldState::AwaitingContinue);
        assert_eq!((engine.time().year(), engine.time().week()), (2, 1));

        let world = engine.world();
        assert_eq!(world.previous_seasons.len(), 1);
        assert_eq!(world.current_season().unwrap().year, 2);
        assert_eq!(world.current_season().unwrap().registrations, next);
        assert_eq!(world.standings(1, 1).unwrap(), top);
    }

    #[test]
    fn test_new_season_without_registrations_fails() {
        let mut world = world(7);
        world.next_registrations = None;

        let mut engine = SimulatorEngine::new(world, settings());

        assert!(matches!(engine.advance(), Err(SimulationError::DataUnavailable(_))));
        assert_eq!(engine.state(), WorldState::NewSeason);
        assert!(engine.world().current_season.is_none());
    }

    #[test]
    fn test_reloaded_world_resumes_mid_season() {
        let mut engine = engine(9);
        engine.advance().unwrap();
        for _ in 0..12 {
            engine.advance().unwrap();
        }
        let played = engine.world().current_season().unwrap().result_count();

        let mut resumed = SimulatorEngine::new(engine.into_world(), settings());

        assert_eq!(resumed.state(), WorldState::AwaitingContinue);
        resumed.advance_to_post_season().unwrap();
        assert!(resumed.world().current_season().unwrap().result_count() >= played);
        assert!(resumed.world().current_season().unwrap().is_complete());
    }

    #[test]
    fn test_reloaded_world_resumes_post_season() {
        let mut engine = engine(10);
        engine.advance().unwrap();
        engine.advance_to_post_season().unwrap();

        let mut resumed = SimulatorEngine::new(engine.into_world(), settings());
        assert_eq!(resumed.state(), WorldState::PostSeason);
        assert_eq!(resumed.advance().unwrap(), WorldState::NewSeason);

        let resumed = SimulatorEngine::new(resumed.into_world(), settings());
        assert_eq!(resumed.state(), WorldState::NewSeason);
    }

    #[test]
    fn test_run_season_is_deterministic() {
        let mut first = engine(8);
        let mut second = engine(8);

        for year in 1..=3 {
            assert_eq!(first.run_season().unwrap(), year);
            assert_eq!(second.run_season().unwrap(), year);
        }

        assert_eq!(first.world(), second.world());
        assert_eq!(first.world().previous_seasons.len(), 2);

        let league_clubs: BTreeSet<ClubId> = first
            .world()
            .next_registrations
            .as_ref()
            .unwrap()
            .league_clubs(&competitions())
            .into_iter()
            .collect();
        assert_eq!(league_clubs.len(), 8);

        first.advance().unwrap();
        assert!(matches!(first.run_season(), Err(SimulationError::InvariantViolation(_))));
    }
}

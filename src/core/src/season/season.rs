use crate::competition::{Competition, CompetitionRegistrations};
use crate::league::ScheduleGenerator;
use crate::season::Calendar;
use crate::SimulationResult;
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One year of competition, with the registrations it was scheduled from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub year: u16,
    pub calendar: Calendar,
    pub registrations: CompetitionRegistrations,
}

impl Season {
    pub fn new(year: u16, registrations: CompetitionRegistrations) -> Self {
        Season {
            year,
            calendar: Calendar::new(year),
            registrations,
        }
    }

    /// Schedules every league over its registered clubs. Other kinds of
    /// competition get no fixtures. Either every league is scheduled or
    /// an error is returned.
    pub fn create<R: Rng + ?Sized>(
        year: u16,
        competitions: &[Competition],
        registrations: CompetitionRegistrations,
        generator: &ScheduleGenerator<'_>,
        rng: &mut R,
    ) -> SimulationResult<Self> {
        let mut season = Season::new(year, registrations);

        for league in competitions.iter().filter(|c| c.is_league()) {
            let rounds = generator.generate(league.id, season.registrations.clubs(league.id), rng)?;

            let mut scheduled = 0;
            for round in &rounds {
                season.calendar.add_fixtures(round.week, &round.fixtures)?;
                scheduled += round.fixtures.len();
            }

            info!("📅 season {}: {} fixtures scheduled for {}", year, scheduled, league.name);
        }

        Ok(season)
    }

    pub fn pending_fixture_count(&self) -> usize {
        self.calendar.fixture_count()
    }

    pub fn result_count(&self) -> usize {
        self.calendar.result_count()
    }

    pub fn is_complete(&self) -> bool {
        self.pending_fixture_count() == 0
    }
}

impl Display for Season {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Season {} #fixtures: {}, #results: {}",
            self.year,
            self.pending_fixture_count(),
            self.result_count()
        )
    }
}

use crate::competition::CompetitionId;
use crate::context::{validate_week, WEEKS_IN_YEAR};
use crate::r#match::{Fixture, MatchResult};
use crate::{SimulationError, SimulationResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One slot of a week: a match still to play, or the result that replaced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarItem {
    Fixture(Fixture),
    Result(MatchResult),
}

impl CalendarItem {
    pub fn fixture(&self) -> &Fixture {
        match self {
            CalendarItem::Fixture(fixture) => fixture,
            CalendarItem::Result(result) => &result.fixture,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, CalendarItem::Fixture(_))
    }
}

/// Week 1..=52 mapped to that week's ordered items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CalendarData")]
pub struct Calendar {
    year: u16,
    weeks: Vec<Vec<CalendarItem>>,
}

#[derive(Deserialize)]
struct CalendarData {
    year: u16,
    weeks: Vec<Vec<CalendarItem>>,
}

impl TryFrom<CalendarData> for Calendar {
    type Error = SimulationError;

    fn try_from(data: CalendarData) -> Result<Self, Self::Error> {
        if data.weeks.len() != WEEKS_IN_YEAR as usize {
            return Err(SimulationError::configuration(format!(
                "calendar {} has {} weeks, expected {}",
                data.year,
                data.weeks.len(),
                WEEKS_IN_YEAR
            )));
        }

        Ok(Calendar {
            year: data.year,
            weeks: data.weeks,
        })
    }
}

impl Calendar {
    pub fn new(year: u16) -> Self {
        Calendar {
            year,
            weeks: vec![Vec::new(); WEEKS_IN_YEAR as usize],
        }
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn num_weeks(&self) -> usize {
        self.weeks.len()
    }

    fn week_slot(&self, week: u8) -> SimulationResult<&Vec<CalendarItem>> {
        validate_week(week)?;
        Ok(&self.weeks[week as usize - 1])
    }

    pub fn items(&self, week: u8) -> SimulationResult<&[CalendarItem]> {
        self.week_slot(week).map(|items| items.as_slice())
    }

    pub fn add_fixtures(&mut self, week: u8, fixtures: &[Fixture]) -> SimulationResult<()> {
        validate_week(week)?;

        self.weeks[week as usize - 1].extend(fixtures.iter().copied().map(CalendarItem::Fixture));

        Ok(())
    }

    /// Replaces each result's fixture in `week` with the result, keeping
    /// the slot order. Either every result is recorded or none is.
    pub fn record_results(&mut self, week: u8, results: &[MatchResult]) -> SimulationResult<()> {
        let items = self.week_slot(week)?;

        let mut positions = Vec::with_capacity(results.len());
        let mut seen = HashSet::with_capacity(results.len());

        for result in results {
            if !seen.insert(result.fixture) {
                return Err(SimulationError::invariant(format!(
                    "fixture {} recorded twice in week {}",
                    result.fixture, week
                )));
            }

            let position = items
                .iter()
                .position(|item| item.is_pending() && *item.fixture() == result.fixture)
                .ok_or_else(|| {
                    SimulationError::invariant(format!(
                        "fixture {} is not pending in week {}",
                        result.fixture, week
                    ))
                })?;

            positions.push(position);
        }

        let slot = &mut self.weeks[week as usize - 1];

        for (position, result) in positions.into_iter().zip(results) {
            slot[position] = CalendarItem::Result(*result);
        }

        Ok(())
    }

    pub fn fixtures_for_week(&self, week: u8) -> SimulationResult<Vec<Fixture>> {
        Ok(self
            .week_slot(week)?
            .iter()
            .filter_map(|item| match item {
                CalendarItem::Fixture(fixture) => Some(*fixture),
                CalendarItem::Result(_) => None,
            })
            .collect())
    }

    pub fn results_for_week(&self, week: u8) -> SimulationResult<Vec<MatchResult>> {
        Ok(self
            .week_slot(week)?
            .iter()
            .filter_map(|item| match item {
                CalendarItem::Result(result) => Some(*result),
                CalendarItem::Fixture(_) => None,
            })
            .collect())
    }

    pub fn has_pending_fixtures(&self, week: u8) -> SimulationResult<bool> {
        Ok(self.week_slot(week)?.iter().any(|item| item.is_pending()))
    }

    /// Pending fixtures with their week.
    pub fn fixtures(&self) -> impl Iterator<Item = (u8, &Fixture)> + '_ {
        self.entries().filter_map(|(week, item)| match item {
            CalendarItem::Fixture(fixture) => Some((week, fixture)),
            CalendarItem::Result(_) => None,
        })
    }

    /// Recorded results with their week.
    pub fn results(&self) -> impl Iterator<Item = (u8, &MatchResult)> + '_ {
        self.entries().filter_map(|(week, item)| match item {
            CalendarItem::Result(result) => Some((week, result)),
            CalendarItem::Fixture(_) => None,
        })
    }

    pub fn results_for_competition(&self, competition_id: CompetitionId) -> Vec<MatchResult> {
        self.results()
            .filter(|(_, result)| result.fixture.competition_id == competition_id)
            .map(|(_, result)| *result)
            .collect()
    }

    fn entries(&self) -> impl Iterator<Item = (u8, &CalendarItem)> + '_ {
        self.weeks
            .iter()
            .enumerate()
            .flat_map(|(idx, items)| items.iter().map(move |item| (idx as u8 + 1, item)))
    }

    pub fn fixture_count(&self) -> usize {
        self.fixtures().count()
    }

    pub fn result_count(&self) -> usize {
        self.results().count()
    }

    pub fn count(&self) -> usize {
        self.weeks.iter().map(|items| items.len()).sum()
    }
}

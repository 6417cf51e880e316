use crate::{SimulationError, SimulationResult};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const DAYS_IN_WEEK: u8 = 7;
pub const WEEKS_IN_YEAR: u8 = 52;

const LAST_PRESEASON_WEEK: u8 = 5;
const LAST_REGULAR_SEASON_WEEK: u8 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekType {
    Preseason,
    RegularSeason,
    Postseason,
}

/// Position of the simulation clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorldTime {
    year: u16,
    week: u8,
    day: u8,
}

impl WorldTime {
    pub fn new(year: u16, week: u8) -> SimulationResult<Self> {
        Self::with_day(year, week, 1)
    }

    pub fn with_day(year: u16, week: u8, day: u8) -> SimulationResult<Self> {
        if year < 1 {
            return Err(SimulationError::configuration("year must be a positive integer"));
        }

        validate_week(week)?;

        if !(1..=DAYS_IN_WEEK).contains(&day) {
            return Err(SimulationError::configuration(format!(
                "day must be between 1 and {}, got {}",
                DAYS_IN_WEEK, day
            )));
        }

        Ok(WorldTime { year, week, day })
    }

    /// Week 1 of year 1.
    pub fn start() -> Self {
        WorldTime {
            year: 1,
            week: 1,
            day: 1,
        }
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn week(&self) -> u8 {
        self.week
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn is_last_week(&self) -> bool {
        self.week == WEEKS_IN_YEAR
    }

    pub fn advance_week(&mut self) {
        if self.week == WEEKS_IN_YEAR {
            self.week = 1;
            self.year += 1;
        } else {
            self.week += 1;
        }

        self.day = 1;
    }

    pub fn advance_day(&mut self) {
        if self.day == DAYS_IN_WEEK {
            self.advance_week();
        } else {
            self.day += 1;
        }
    }

    /// Moves the clock to week 1 of the following year.
    pub fn start_next_year(&mut self) {
        self.year += 1;
        self.week = 1;
        self.day = 1;
    }

    pub fn weekday(&self) -> Weekday {
        match self.day {
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }

    pub fn week_type(&self) -> WeekType {
        match self.week {
            1..=LAST_PRESEASON_WEEK => WeekType::Preseason,
            w if w <= LAST_REGULAR_SEASON_WEEK => WeekType::RegularSeason,
            _ => WeekType::Postseason,
        }
    }
}

impl Display for WorldTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Year: {:2}, Week: {:2}, Day: {} ({})",
            self.year,
            self.week,
            self.day,
            self.weekday()
        )
    }
}

pub fn validate_week(week: u8) -> SimulationResult<()> {
    if (1..=WEEKS_IN_YEAR).contains(&week) {
        Ok(())
    } else {
        Err(SimulationError::configuration(format!(
            "week must be between 1 and {}, got {}",
            WEEKS_IN_YEAR, week
        )))
    }
}

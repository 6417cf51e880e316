use crate::context::WEEKS_IN_YEAR;
use crate::{SimulationError, SimulationResult};
use serde::{Deserialize, Serialize};

/// League weeks for a 16-club double round-robin. Weeks 1-7 and 47-52 stay
/// free, and there is a break after every run of five rounds.
pub const LEAGUE_WEEK_OFFSETS: [u8; 30] = [
    8, 9, 10, 11, 12, 14, 15, 16, 17, 18, 21, 22, 23, 24, 25, 28, 29, 30, 31, 32, 35, 36, 37, 38,
    39, 42, 43, 44, 45, 46,
];

/// Maps the n-th produced round (0-based) to a calendar week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct WeekOffsetTable {
    weeks: Vec<u8>,
}

impl WeekOffsetTable {
    pub fn new(weeks: Vec<u8>) -> SimulationResult<Self> {
        for week in &weeks {
            // The last week belongs to the post-season and is never played.
            if *week < 1 || *week >= WEEKS_IN_YEAR {
                return Err(SimulationError::configuration(format!(
                    "week offset {} outside 1..={}",
                    week,
                    WEEKS_IN_YEAR - 1
                )));
            }
        }

        if weeks.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(SimulationError::configuration(
                "week offsets must be strictly increasing",
            ));
        }

        Ok(WeekOffsetTable { weeks })
    }

    pub fn league() -> Self {
        WeekOffsetTable {
            weeks: LEAGUE_WEEK_OFFSETS.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn week_for(&self, round_index: usize) -> Option<u8> {
        self.weeks.get(round_index).copied()
    }

    pub fn weeks(&self) -> &[u8] {
        &self.weeks
    }
}

impl TryFrom<Vec<u8>> for WeekOffsetTable {
    type Error = SimulationError;

    fn try_from(weeks: Vec<u8>) -> Result<Self, Self::Error> {
        WeekOffsetTable::new(weeks)
    }
}

impl From<WeekOffsetTable> for Vec<u8> {
    fn from(table: WeekOffsetTable) -> Self {
        table.weeks
    }
}

impl Default for WeekOffsetTable {
    fn default() -> Self {
        Self::league()
    }
}

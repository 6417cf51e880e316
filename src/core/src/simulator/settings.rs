use crate::league::{ClubOrdering, PromotionRules, ScheduleGenerator, WeekOffsetTable};
use crate::SimulationResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorSettings {
    pub promotion: PromotionRules,
    pub week_offsets: WeekOffsetTable,
    pub club_ordering: ClubOrdering,
    pub double_round: bool,
}

impl SimulatorSettings {
    pub fn builder() -> SimulatorSettingsBuilder {
        SimulatorSettingsBuilder::new()
    }

    pub fn schedule_generator(&self) -> ScheduleGenerator<'_> {
        ScheduleGenerator::new(&self.week_offsets, self.club_ordering, self.double_round)
    }
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        SimulatorSettings {
            promotion: PromotionRules::default(),
            week_offsets: WeekOffsetTable::league(),
            club_ordering: ClubOrdering::Shuffled,
            double_round: true,
        }
    }
}

#[derive(Default)]
pub struct SimulatorSettingsBuilder {
    promote_count: Option<usize>,
    relegate_count: Option<usize>,
    week_offsets: Option<Vec<u8>>,
    club_ordering: Option<ClubOrdering>,
    double_round: Option<bool>,
}

impl SimulatorSettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn promote_count(mut self, promote_count: usize) -> Self {
        self.promote_count = Some(promote_count);
        self
    }

    pub fn relegate_count(mut self, relegate_count: usize) -> Self {
        self.relegate_count = Some(relegate_count);
        self
    }

    pub fn week_offsets(mut self, week_offsets: Vec<u8>) -> Self {
        self.week_offsets = Some(week_offsets);
        self
    }

    pub fn club_ordering(mut self, club_ordering: ClubOrdering) -> Self {
        self.club_ordering = Some(club_ordering);
        self
    }

    pub fn double_round(mut self, double_round: bool) -> Self {
        self.double_round = Some(double_round);
        self
    }

    pub fn build(self) -> SimulationResult<SimulatorSettings> {
        let defaults = PromotionRules::default();

        let week_offsets = match self.week_offsets {
            Some(weeks) => WeekOffsetTable::new(weeks)?,
            None => WeekOffsetTable::league(),
        };

        Ok(SimulatorSettings {
            promotion: PromotionRules::new(
                self.promote_count.unwrap_or(defaults.promote_count),
                self.relegate_count.unwrap_or(defaults.relegate_count),
            ),
            week_offsets,
            club_ordering: self.club_ordering.unwrap_or_default(),
            double_round: self.double_round.unwrap_or(true),
        })
    }
}

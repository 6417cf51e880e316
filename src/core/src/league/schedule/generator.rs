use crate::club::ClubId;
use crate::competition::CompetitionId;
use crate::league::schedule::{RoundRobin, WeekOffsetTable};
use crate::r#match::Fixture;
use crate::{SimulationError, SimulationResult};
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClubOrdering {
    /// Shuffle clubs before pairing so home/away balance varies per season.
    #[default]
    Shuffled,
    AsRegistered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledRound {
    pub week: u8,
    pub fixtures: Vec<Fixture>,
}

pub struct ScheduleGenerator<'t> {
    week_offsets: &'t WeekOffsetTable,
    ordering: ClubOrdering,
    double_round: bool,
}

impl<'t> ScheduleGenerator<'t> {
    pub fn new(week_offsets: &'t WeekOffsetTable, ordering: ClubOrdering, double_round: bool) -> Self {
        ScheduleGenerator {
            week_offsets,
            ordering,
            double_round,
        }
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        competition_id: CompetitionId,
        clubs: &[ClubId],
        rng: &mut R,
    ) -> SimulationResult<Vec<ScheduledRound>> {
        let mut unique = HashSet::with_capacity(clubs.len());
        if let Some(duplicate) = clubs.iter().find(|club_id| !unique.insert(**club_id)) {
            return Err(SimulationError::configuration(format!(
                "club {} registered twice in competition {}",
                duplicate, competition_id
            )));
        }

        let mut ordered = clubs.to_vec();
        if self.ordering == ClubOrdering::Shuffled {
            ordered.shuffle(rng);
        }

        let tours = RoundRobin::generate(&ordered, self.double_round);

        if tours.len() > self.week_offsets.len() {
            return Err(SimulationError::configuration(format!(
                "competition {} needs {} rounds, only {} weeks available",
                competition_id,
                tours.len(),
                self.week_offsets.len()
            )));
        }

        let rounds: Vec<ScheduledRound> = tours
            .into_iter()
            .enumerate()
            .filter_map(|(idx, tour)| {
                let week = self.week_offsets.week_for(idx)?;

                let fixtures = tour
                    .pairings
                    .iter()
                    .map(|pairing| Fixture::new(competition_id, tour.round, pairing.home, pairing.away))
                    .collect();

                Some(ScheduledRound { week, fixtures })
            })
            .collect();

        debug!(
            "scheduled competition {}: {} clubs, {} rounds",
            competition_id,
            clubs.len(),
            rounds.len()
        );

        Ok(rounds)
    }
}

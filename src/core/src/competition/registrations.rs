use crate::club::{Club, ClubId};
use crate::competition::{league_chain, Competition, CompetitionId};
use crate::{SimulationError, SimulationResult};
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Which clubs play in which competition for one season.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionRegistrations {
    entries: BTreeMap<CompetitionId, Vec<ClubId>>,
}

impl CompetitionRegistrations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, competition_id: CompetitionId, club_id: ClubId) {
        let clubs = self.entries.entry(competition_id).or_default();

        if !clubs.contains(&club_id) {
            clubs.push(club_id);
        }
    }

    pub fn register_all(&mut self, competition_id: CompetitionId, club_ids: &[ClubId]) {
        for club_id in club_ids {
            self.register(competition_id, *club_id);
        }
    }

    pub fn clubs(&self, competition_id: CompetitionId) -> &[ClubId] {
        self.entries
            .get(&competition_id)
            .map(|clubs| clubs.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_registered(&self, competition_id: CompetitionId, club_id: ClubId) -> bool {
        self.clubs(competition_id).contains(&club_id)
    }

    pub fn competitions_of(&self, club_id: ClubId) -> Vec<CompetitionId> {
        self.entries
            .iter()
            .filter(|(_, clubs)| clubs.contains(&club_id))
            .map(|(competition_id, _)| *competition_id)
            .collect()
    }

    /// Every club registered to any league, top tier first.
    pub fn league_clubs(&self, competitions: &[Competition]) -> Vec<ClubId> {
        league_chain(competitions)
            .iter()
            .flat_map(|league| self.clubs(league.id).iter().copied())
            .collect()
    }

    /// Clubs of `clubs` that are in no league this season.
    pub fn unassigned_clubs(&self, clubs: &[Club], competitions: &[Competition]) -> Vec<ClubId> {
        let in_leagues: BTreeSet<ClubId> = self.league_clubs(competitions).into_iter().collect();

        clubs
            .iter()
            .map(|club| club.id)
            .filter(|id| !in_leagues.contains(id))
            .collect()
    }

    /// Registers every league club into every cup, each cup in its own
    /// shuffled order.
    pub fn register_cups<R: Rng + ?Sized>(&mut self, competitions: &[Competition], rng: &mut R) {
        let league_clubs = self.league_clubs(competitions);

        if league_clubs.is_empty() {
            return;
        }

        for cup in competitions.iter().filter(|c| c.is_cup()) {
            let mut field = league_clubs.clone();
            field.shuffle(rng);

            debug!("cup registration: {} clubs into {}", field.len(), cup.name);

            self.entries.insert(cup.id, field);
        }
    }

    /// First season: fill each league, top tier first, from the shuffled
    /// club pool, then enter every league club into every cup.
    pub fn allocate_initial<R: Rng + ?Sized>(
        clubs: &[Club],
        competitions: &[Competition],
        rng: &mut R,
    ) -> SimulationResult<Self> {
        let leagues = league_chain(competitions);
        let required: usize = leagues.iter().map(|l| l.required_clubs).sum();

        if required > clubs.len() {
            return Err(SimulationError::configuration(format!(
                "leagues require {} clubs but only {} exist",
                required,
                clubs.len()
            )));
        }

        let mut pool: Vec<ClubId> = clubs.iter().map(|c| c.id).collect();
        pool.shuffle(rng);

        let mut registrations = CompetitionRegistrations::new();
        let mut remaining = pool.into_iter();

        for league in leagues {
            let allocated: Vec<ClubId> = remaining.by_ref().take(league.required_clubs).collect();

            info!("allocated {} clubs to {}", allocated.len(), league.name);

            registrations.register_all(league.id, &allocated);
        }

        registrations.register_cups(competitions, rng);

        Ok(registrations)
    }
}

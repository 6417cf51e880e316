use crate::club::ClubId;
use crate::competition::{league_chain, Competition, CompetitionId, CompetitionRegistrations};
use crate::league::LeagueTable;
use crate::{SimulationError, SimulationResult};
use itertools::Itertools;
use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Club -> league for next season. `None` sends the club back to the
/// unassigned pool.
pub type ClubMovements = BTreeMap<ClubId, Option<CompetitionId>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionRules {
    pub promote_count: usize,
    pub relegate_count: usize,
}

impl PromotionRules {
    pub fn new(promote_count: usize, relegate_count: usize) -> Self {
        PromotionRules {
            promote_count,
            relegate_count,
        }
    }

    /// Zones in one tier must not overlap.
    pub fn validate(&self, competition_id: CompetitionId, tier_size: usize) -> SimulationResult<()> {
        if self.promote_count + self.relegate_count >= tier_size {
            return Err(SimulationError::configuration(format!(
                "competition {}: promote {} + relegate {} must be below tier size {}",
                competition_id, self.promote_count, self.relegate_count, tier_size
            )));
        }

        Ok(())
    }
}

impl Default for PromotionRules {
    fn default() -> Self {
        PromotionRules::new(3, 3)
    }
}

pub struct PromotionEngine<'r> {
    rules: &'r PromotionRules,
}

impl<'r> PromotionEngine<'r> {
    pub fn new(rules: &'r PromotionRules) -> Self {
        PromotionEngine { rules }
    }

    /// `tiers` are final tables, highest tier first. Nothing is computed
    /// unless every tier passes the zone check.
    pub fn compute_movements<R: Rng + ?Sized>(
        &self,
        tiers: &[LeagueTable],
        unassigned: &[ClubId],
        rng: &mut R,
    ) -> SimulationResult<ClubMovements> {
        for tier in tiers {
            self.rules.validate(tier.competition_id, tier.len())?;
        }

        let mut movements = ClubMovements::new();

        for (upper, lower) in tiers.iter().tuple_windows() {
            for club_id in lower.top(self.rules.promote_count) {
                movements.insert(club_id, Some(upper.competition_id));
            }

            for club_id in upper.bottom(self.rules.relegate_count) {
                movements.insert(club_id, Some(lower.competition_id));
            }
        }

        if let Some(lowest) = tiers.last() {
            for club_id in lowest.bottom(self.rules.relegate_count) {
                movements.insert(club_id, None);
            }

            let mut pool = unassigned.to_vec();
            pool.shuffle(rng);

            for club_id in pool.into_iter().take(self.rules.promote_count) {
                movements.insert(club_id, Some(lowest.competition_id));
            }
        }

        debug!("computed {} club movements over {} tiers", movements.len(), tiers.len());

        Ok(movements)
    }

    /// Next season's registrations: clubs that did not move keep their
    /// league, movers join theirs after them. Cups are drawn afresh from
    /// every league club.
    pub fn apply<R: Rng + ?Sized>(
        movements: &ClubMovements,
        current: &CompetitionRegistrations,
        competitions: &[Competition],
        rng: &mut R,
    ) -> CompetitionRegistrations {
        let mut next = CompetitionRegistrations::new();

        for league in league_chain(competitions) {
            let stayers = current
                .clubs(league.id)
                .iter()
                .copied()
                .filter(|club_id| !movements.contains_key(club_id));

            let arrivals = movements
                .iter()
                .filter(|(_, destination)| **destination == Some(league.id))
                .map(|(club_id, _)| *club_id);

            let clubs: Vec<ClubId> = stayers.chain(arrivals).collect();

            info!("{}: {} clubs registered for next season", league.name, clubs.len());

            next.register_all(league.id, &clubs);
        }

        next.register_cups(competitions, rng);

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Club, Squad};
    use crate::r#match::{Fixture, MatchResult, Score};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    fn competitions() -> Vec<Competition> {
        vec![
            Competition::cup(3, "League Cup", "LC", 100),
            Competition::league(2, "Championship", "CH", 2, 6),
            Competition::league(1, "Premier League", "PL", 1, 6),
        ]
    }

    fn clubs(range: std::ops::RangeInclusive<ClubId>) -> Vec<Club> {
        range
            .map(|id| Club::new(id, format!("Club {:02}", id), Squad::new(100)))
            .collect()
    }

    /// Lower id finishes higher: every club beats all clubs with a higher id.
    fn table(competition_id: CompetitionId, clubs: &[Club]) -> LeagueTable {
        let refs: Vec<&Club> = clubs.iter().collect();

        let results: Vec<MatchResult> = clubs
            .iter()
            .tuple_combinations()
            .map(|(a, b)| MatchResult::new(Fixture::new(competition_id, 1, a.id, b.id), Score::new(1, 0)))
            .collect();

        LeagueTable::compute(competition_id, &refs, &results)
    }

    #[test]
    fn test_movements_between_tiers_and_pool() {
        let rules = PromotionRules::default();
        let engine = PromotionEngine::new(&rules);

        let top = clubs(1..=8);
        let bottom = clubs(11..=18);
        let tiers = vec![table(1, &top), table(2, &bottom)];

        let movements = engine
            .compute_movements(&tiers, &[21, 22, 23, 24], &mut StdRng::seed_from_u64(1))
            .unwrap();

        for club_id in [6, 7, 8] {
            assert_eq!(movements[&club_id], Some(2));
        }
        for club_id in [11, 12, 13] {
            assert_eq!(movements[&club_id], Some(1));
        }
        for club_id in [16, 17, 18] {
            assert_eq!(movements[&club_id], None);
        }

        let from_pool: Vec<ClubId> = movements
            .iter()
            .filter(|(club_id, dest)| **club_id > 20 && **dest == Some(2))
            .map(|(club_id, _)| *club_id)
            .collect();
        assert_eq!(from_pool.len(), 3);

        assert_eq!(movements.len(), 12);
        assert!(!movements.contains_key(&1));
        assert!(!movements.contains_key(&14));
    }

    #[test]
    fn test_apply_conserves_clubs() {
        let all_clubs = clubs(1..=16);
        let competitions = competitions();
        let mut rng = StdRng::seed_from_u64(11);

        let current = CompetitionRegistrations::allocate_initial(&all_clubs, &competitions, &mut rng).unwrap();
        let pool = current.unassigned_clubs(&all_clubs, &competitions);

        let top: Vec<Club> = current.clubs(1).iter().map(|id| all_clubs[*id as usize - 1].clone()).collect();
        let bottom: Vec<Club> = current.clubs(2).iter().map(|id| all_clubs[*id as usize - 1].clone()).collect();
        let tiers = vec![table(1, &top), table(2, &bottom)];

        let rules = PromotionRules::new(2, 2);
        let movements = PromotionEngine::new(&rules)
            .compute_movements(&tiers, &pool, &mut rng)
            .unwrap();

        let next = PromotionEngine::apply(&movements, &current, &competitions, &mut rng);
        let next_pool = next.unassigned_clubs(&all_clubs, &competitions);

        assert_eq!(next.clubs(1).len(), 6);
        assert_eq!(next.clubs(2).len(), 6);
        assert_eq!(next_pool.len(), pool.len());

        let mut seen: BTreeSet<ClubId> = next.league_clubs(&competitions).into_iter().collect();
        seen.extend(next_pool.iter().copied());
        assert_eq!(seen.len(), 16);
        assert_eq!(next.league_clubs(&competitions).len() + next_pool.len(), 16);

        for club_id in tiers[1].top(2) {
            assert!(next.is_registered(1, club_id));
        }
        for club_id in tiers[0].bottom(2) {
            assert!(next.is_registered(2, club_id));
        }
        for club_id in tiers[1].bottom(2) {
            assert!(next_pool.contains(&club_id));
        }

        assert_eq!(next.clubs(3).len(), 12);
    }

    #[test]
    fn test_overlapping_zones_rejected() {
        let rules = PromotionRules::new(3, 3);
        let engine = PromotionEngine::new(&rules);

        let tiers = vec![table(1, &clubs(1..=8)), table(2, &clubs(11..=16))];

        let result = engine.compute_movements(&tiers, &[], &mut StdRng::seed_from_u64(1));

        assert!(matches!(result, Err(SimulationError::Configuration(_))));
    }

    #[test]
    fn test_small_pool_backfills_what_it_can() {
        let rules = PromotionRules::new(3, 3);
        let engine = PromotionEngine::new(&rules);

        let tiers = vec![table(1, &clubs(1..=8))];

        let movements = engine
            .compute_movements(&tiers, &[40], &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert_eq!(movements[&40], Some(1));
        assert_eq!(movements.values().filter(|dest| dest.is_none()).count(), 3);
    }
}

use crate::r#match::{Fixture, MatchResult, Score};
use crate::{SimulationError, SimulationResult};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

/// Relative likelihood of the home side scoring 0..=5 goals.
pub const HOME_GOAL_WEIGHTS: [f64; 6] = [1.0, 1.25, 0.75, 0.5, 0.25, 0.125];

/// Relative likelihood of the away side scoring 0..=5 goals.
pub const AWAY_GOAL_WEIGHTS: [f64; 6] = [1.5, 0.99, 0.66, 0.33, 0.11, 0.033];

/// Source of match scores.
pub trait ScoreSampler {
    fn sample<R: Rng + ?Sized>(&mut self, fixture: &Fixture, rng: &mut R) -> Score;
}

/// Draws home and away goals independently from two fixed weighted
/// distributions. Club identity and strength play no part.
#[derive(Debug, Clone)]
pub struct WeightedScoreSampler {
    home: WeightedIndex<f64>,
    away: WeightedIndex<f64>,
}

impl WeightedScoreSampler {
    pub fn try_new(home_weights: &[f64], away_weights: &[f64]) -> SimulationResult<Self> {
        let home = WeightedIndex::new(home_weights.iter().copied())
            .map_err(|e| SimulationError::configuration(format!("home goal weights: {}", e)))?;

        let away = WeightedIndex::new(away_weights.iter().copied())
            .map_err(|e| SimulationError::configuration(format!("away goal weights: {}", e)))?;

        Ok(WeightedScoreSampler { home, away })
    }
}

impl Default for WeightedScoreSampler {
    fn default() -> Self {
        Self::try_new(&HOME_GOAL_WEIGHTS, &AWAY_GOAL_WEIGHTS).expect("static goal weights are valid")
    }
}

impl ScoreSampler for WeightedScoreSampler {
    fn sample<R: Rng + ?Sized>(&mut self, _fixture: &Fixture, rng: &mut R) -> Score {
        let home = self.home.sample(rng) as u8;
        let away = self.away.sample(rng) as u8;

        Score::new(home, away)
    }
}

pub struct MatchResultSimulator<S: ScoreSampler = WeightedScoreSampler> {
    sampler: S,
}

impl Default for MatchResultSimulator<WeightedScoreSampler> {
    fn default() -> Self {
        MatchResultSimulator::new(WeightedScoreSampler::default())
    }
}

impl<S: ScoreSampler> MatchResultSimulator<S> {
    pub fn new(sampler: S) -> Self {
        MatchResultSimulator { sampler }
    }

    pub fn simulate<R: Rng + ?Sized>(&mut self, fixture: &Fixture, rng: &mut R) -> MatchResult {
        let score = self.sampler.sample(fixture, rng);

        MatchResult::new(*fixture, score)
    }

    pub fn simulate_all<R: Rng + ?Sized>(&mut self, fixtures: &[Fixture], rng: &mut R) -> Vec<MatchResult> {
        fixtures
            .iter()
            .map(|fixture| self.simulate(fixture, rng))
            .collect()
    }
}

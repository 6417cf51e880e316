use crate::DatabaseEntity;
use fitba_core::{
    Club, Competition, CompetitionRegistrations, SimulationError, SimulationResult, Squad, World,
};
use log::info;
use rand::SeedableRng;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    /// Builds a fresh world: squads rated at random, leagues filled from the
    /// shuffled club pool. The same seed always yields the same world.
    pub fn generate(data: &DatabaseEntity, seed: u64) -> SimulationResult<World> {
        info!("🌍 generating world, seed: {:#018x}", seed);

        let mut rng = StdRng::seed_from_u64(seed);

        let clubs = DatabaseGenerator::generate_clubs(data, &mut rng)?;
        let competitions = DatabaseGenerator::generate_competitions(data);

        let registrations = CompetitionRegistrations::allocate_initial(&clubs, &competitions, &mut rng)?;

        info!(
            "world generated: {} clubs, {} competitions",
            clubs.len(),
            competitions.len()
        );

        Ok(World::new(seed, clubs, competitions, registrations))
    }

    fn generate_clubs(data: &DatabaseEntity, rng: &mut StdRng) -> SimulationResult<Vec<Club>> {
        let ratings = Uniform::new_inclusive(Squad::MIN_RATING, Squad::MAX_RATING)
            .map_err(|e| SimulationError::configuration(format!("squad ratings: {}", e)))?;

        Ok(data
            .clubs
            .iter()
            .map(|club| Club::new(club.id, club.name.clone(), Squad::new(ratings.sample(rng))))
            .collect())
    }

    fn generate_competitions(data: &DatabaseEntity) -> Vec<Competition> {
        data.competitions
            .iter()
            .map(|competition| {
                Competition::new(
                    competition.id,
                    competition.name.clone(),
                    competition.short_name.clone(),
                    competition.kind.into(),
                    competition.ranking,
                    competition.required_clubs,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatabaseLoader;

    #[test]
    fn test_generate_allocates_leagues() {
        let database = DatabaseLoader::load().unwrap();

        let world = DatabaseGenerator::generate(&database, 42).unwrap();

        assert_eq!(world.seed, 42);
        assert_eq!(world.clubs.len(), 91);
        assert!(world.current_season.is_none());

        let registrations = world.next_registrations.as_ref().unwrap();
        assert_eq!(registrations.clubs(1).len(), 16);
        assert_eq!(registrations.clubs(2).len(), 16);
        assert_eq!(registrations.clubs(3).len(), 32);
        assert_eq!(registrations.unassigned_clubs(&world.clubs, &world.competitions).len(), 59);

        assert!(world
            .clubs
            .iter()
            .all(|c| (Squad::MIN_RATING..=Squad::MAX_RATING).contains(&c.squad.rating)));
    }

    #[test]
    fn test_generate_is_seed_deterministic() {
        let database = DatabaseLoader::load().unwrap();

        let first = DatabaseGenerator::generate(&database, 7).unwrap();
        let second = DatabaseGenerator::generate(&database, 7).unwrap();

        assert_eq!(first, second);
    }
}

use database::{DatabaseGenerator, DatabaseLoader, SnapshotStore};
use env_logger::Env;
use fitba_core::utils::TimeEstimation;
use fitba_core::{SimulatorEngine, SimulatorSettings};
use log::info;
use std::env;

const DEFAULT_SEASONS: u16 = 3;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let seasons = match env::var("SEASONS") {
        Ok(value) => value.parse()?,
        Err(_) => DEFAULT_SEASONS,
    };

    let seed = match env::var("SEED") {
        Ok(value) => value.parse()?,
        Err(_) => rand::random::<u64>(),
    };

    let snapshot_store = env::var("SNAPSHOT_PATH").ok().map(SnapshotStore::new);

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);
    let database = database?;

    info!("database loaded: {} ms", estimated);

    let (world, estimated) = TimeEstimation::estimate(|| DatabaseGenerator::generate(&database, seed));
    let world = world?;

    info!("world generated: {} ms", estimated);

    let mut engine = SimulatorEngine::new(world, SimulatorSettings::default());

    for _ in 0..seasons {
        let (year, estimated) = TimeEstimation::estimate(|| engine.run_season());
        let year = year?;

        info!("⚽ season {} simulated: {} ms", year, estimated);

        let world = engine.world();

        for league in world.leagues() {
            let table = world.standings(year, league.id)?;

            info!("{} {} final table\n{}", year, league.name, table);
        }

        if let Some(store) = &snapshot_store {
            store.save(world)?;

            info!("world saved to {}", store.path().display());
        }
    }

    Ok(())
}

pub mod club;
pub mod competition;
pub mod context;
pub mod league;
pub mod r#match;
pub mod season;
pub mod simulator;
pub mod storage;
pub mod utils;
pub mod world;

mod error;

pub use error::*;

pub use club::{Club, ClubId, Squad};
pub use competition::{Competition, CompetitionId, CompetitionKind, CompetitionRegistrations};
pub use context::WorldTime;
pub use league::{LeagueTable, LeagueTableRow, PromotionRules};
pub use r#match::{Fixture, MatchResult, Score};
pub use season::{Calendar, CalendarItem, Season};
pub use simulator::{SimulatorEngine, SimulatorSettings, SimulatorSnapshot, WorldState};
pub use storage::SeasonStore;
pub use world::World;

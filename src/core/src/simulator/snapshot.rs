use crate::context::WorldTime;
use crate::r#match::{Fixture, MatchResult};
use crate::simulator::WorldState;
use serde::Serialize;

/// Read-only view of the engine for whoever renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulatorSnapshot {
    pub time: WorldTime,
    pub state: WorldState,
    pub fixtures: Vec<Fixture>,
    pub results: Vec<MatchResult>,
}

impl SimulatorSnapshot {
    pub fn has_match_results(&self) -> bool {
        !self.results.is_empty()
    }
}

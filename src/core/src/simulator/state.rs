use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Where the season lifecycle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorldState {
    NewSeason,
    AwaitingContinue,
    PreFixtures,
    ProcessingFixtures,
    PostFixtures,
    PostSeason,
}

impl Display for WorldState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WorldState::NewSeason => "New season",
            WorldState::AwaitingContinue => "Awaiting continue",
            WorldState::PreFixtures => "Pre fixtures",
            WorldState::ProcessingFixtures => "Processing fixtures",
            WorldState::PostFixtures => "Post fixtures",
            WorldState::PostSeason => "Post season",
        };

        write!(f, "{}", name)
    }
}

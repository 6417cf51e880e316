use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub type ClubId = u32;

/// Squad strength. Shown to the player; match results do not read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Squad {
    pub rating: u16,
}

impl Squad {
    pub const MIN_RATING: u16 = 50;
    pub const MAX_RATING: u16 = 200;

    pub fn new(rating: u16) -> Self {
        Squad { rating }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    pub squad: Squad,
}

impl Club {
    pub fn new(id: ClubId, name: String, squad: Squad) -> Self {
        Club { id, name, squad }
    }
}

impl Display for Club {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Club: {} (squad {:3})", self.name, self.squad.rating)
    }
}

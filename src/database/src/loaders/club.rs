use serde::Deserialize;

const STATIC_CLUBS_JSON: &str = include_str!("../data/clubs.json");

#[derive(Debug, Deserialize)]
pub struct ClubEntity {
    pub id: u32,
    pub name: String,
}

pub struct ClubLoader;

impl ClubLoader {
    pub fn load() -> serde_json::Result<Vec<ClubEntity>> {
        serde_json::from_str(STATIC_CLUBS_JSON)
    }
}

use fitba_core::CompetitionKind;
use serde::Deserialize;

const STATIC_COMPETITIONS_JSON: &str = include_str!("../data/competitions.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionKindEntity {
    League,
    Cup,
    Friendly,
}

impl From<CompetitionKindEntity> for CompetitionKind {
    fn from(kind: CompetitionKindEntity) -> Self {
        match kind {
            CompetitionKindEntity::League => CompetitionKind::League,
            CompetitionKindEntity::Cup => CompetitionKind::Cup,
            CompetitionKindEntity::Friendly => CompetitionKind::Friendly,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CompetitionEntity {
    pub id: u32,
    pub name: String,
    pub short_name: String,
    pub kind: CompetitionKindEntity,
    pub ranking: u8,
    #[serde(default)]
    pub required_clubs: usize,
}

pub struct CompetitionLoader;

impl CompetitionLoader {
    pub fn load() -> serde_json::Result<Vec<CompetitionEntity>> {
        serde_json::from_str(STATIC_COMPETITIONS_JSON)
    }
}

mod club;
mod competition;

pub use club::*;
pub use competition::*;

pub struct DatabaseEntity {
    pub clubs: Vec<ClubEntity>,
    pub competitions: Vec<CompetitionEntity>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> serde_json::Result<DatabaseEntity> {
        Ok(DatabaseEntity {
            clubs: ClubLoader::load()?,
            competitions: CompetitionLoader::load()?,
        })
    }
}

use chrono::{DateTime, Utc};
use fitba_core::World;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct WorldSnapshot {
    pub saved_at: DateTime<Utc>,
    pub world: World,
}

#[derive(Serialize)]
struct WorldSnapshotRef<'w> {
    saved_at: DateTime<Utc>,
    world: &'w World,
}

/// Keeps a world on disk as gzip-compressed JSON.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, world: &World) -> io::Result<()> {
        let file = File::create(&self.path)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());

        let snapshot = WorldSnapshotRef {
            saved_at: Utc::now(),
            world,
        };

        serde_json::to_writer(&mut encoder, &snapshot)?;
        encoder.finish()?.flush()?;

        debug!("world saved to {}", self.path.display());

        Ok(())
    }

    pub fn load(&self) -> io::Result<WorldSnapshot> {
        let file = File::open(&self.path)?;
        let decoder = GzDecoder::new(BufReader::new(file));

        let snapshot: WorldSnapshot = serde_json::from_reader(decoder)?;

        debug!(
            "world loaded from {}, saved at {}",
            self.path.display(),
            snapshot.saved_at
        );

        Ok(snapshot)
    }
}

// src/db/snapshots.rs
//
// One JSON file per source holding the listings seen on the last successful
// run. Reads and writes never fail the run: a bad file reads as empty and a
// failed write is only logged.

use crate::domain::listing::{to_snapshot, Listing, Snapshot};
use crate::scraper::Source;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("snapshot io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot json error at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, source: Source) -> PathBuf {
        self.dir.join(source.snapshot_file())
    }

    /// The prior snapshot for `source`, or an empty one if there is none
    /// or it cannot be read.
    pub fn load(&self, source: Source) -> Snapshot {
        let path = self.path_for(source);
        if !path.exists() {
            tracing::info!(%source, path = %path.display(), "no saved snapshot yet");
            return Snapshot::new();
        }

        match read_listings(&path) {
            Ok(listings) => to_snapshot(&listings),
            Err(e) => {
                tracing::error!(%source, error = %e, "failed to load saved listings, starting empty");
                Snapshot::new()
            }
        }
    }

    /// Replaces the stored snapshot for `source` with `listings`.
    pub fn save(&self, source: Source, listings: &[Listing]) {
        let path = self.path_for(source);
        match self.write_listings(&path, listings) {
            Ok(()) => tracing::info!(%source, path = %path.display(), count = listings.len(), "saved listings"),
            Err(e) => tracing::error!(%source, error = %e, "failed to save listings"),
        }
    }

    fn write_listings(&self, path: &Path, listings: &[Listing]) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(io_err)?;
        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, listings).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        writer.flush().map_err(io_err)?;
        Ok(())
    }
}

fn read_listings(path: &Path) -> Result<Vec<Listing>, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

//! Seed data loading.
//!
//! A seed file describes stations and lines by name, so a fresh server can
//! start with a network already in place. It is applied through the normal
//! store operations, so the same validation applies as for HTTP requests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{Distance, StationId};

use super::error::StoreError;
use super::network::NetworkStore;

/// Errors that can occur while loading seed data.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("seed file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A section names a station that is not in the station list
    #[error("line {line:?} refers to unknown station {station:?}")]
    UnknownStation { line: String, station: String },

    #[error("line {0:?} has no sections")]
    EmptyLine(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Contents of a seed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedFile {
    /// Station names, created in order.
    pub stations: Vec<String>,
    pub lines: Vec<SeedLine>,
}

/// A line in a seed file. The first section creates the line; the rest are
/// added in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedLine {
    pub name: String,
    pub color: String,
    pub sections: Vec<SeedSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSection {
    pub up: String,
    pub down: String,
    pub distance: i64,
}

/// Counts of what a seed created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub stations: usize,
    pub lines: usize,
    pub sections: usize,
}

impl SeedFile {
    /// Parse seed data from a JSON string.
    pub fn parse(contents: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Read and parse a seed file.
    pub fn read(path: &Path) -> Result<Self, SeedError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Create the seed's stations and lines in `store`.
    ///
    /// Stops at the first error; whatever was created before it stays.
    pub async fn apply(&self, store: &NetworkStore) -> Result<SeedSummary, SeedError> {
        let mut ids: HashMap<&str, StationId> = HashMap::new();
        for name in &self.stations {
            let station = store.create_station(name).await?;
            ids.insert(name.as_str(), station.id());
        }

        let mut sections = 0;
        for line in &self.lines {
            let resolve = |station: &str| {
                ids.get(station).copied().ok_or_else(|| SeedError::UnknownStation {
                    line: line.name.clone(),
                    station: station.to_string(),
                })
            };

            let (first, rest) = line
                .sections
                .split_first()
                .ok_or_else(|| SeedError::EmptyLine(line.name.clone()))?;

            let created = store
                .create_line(
                    &line.name,
                    &line.color,
                    resolve(&first.up)?,
                    resolve(&first.down)?,
                    Distance::new(first.distance).map_err(StoreError::from)?,
                )
                .await?;

            for section in rest {
                store
                    .add_section(
                        created.id(),
                        resolve(&section.up)?,
                        resolve(&section.down)?,
                        Distance::new(section.distance).map_err(StoreError::from)?,
                    )
                    .await?;
            }
            sections += line.sections.len();
        }

        let summary = SeedSummary {
            stations: self.stations.len(),
            lines: self.lines.len(),
            sections,
        };
        info!(
            stations = summary.stations,
            lines = summary.lines,
            sections = summary.sections,
            "Applied seed data"
        );
        Ok(summary)
    }
}

/// Read a seed file and apply it to `store`.
pub async fn load_seed(store: &NetworkStore, path: &Path) -> Result<SeedSummary, SeedError> {
    let seed = SeedFile::read(path)?;
    seed.apply(store).await
}

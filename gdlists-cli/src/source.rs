use std::fs;
use std::io;
use std::path::PathBuf;

use gdlists_core::{Level, LevelSource, ReportError, levels_from_json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ReportError,
    },
}

/// Level export on disk, either a bare array or `{ "levels": [...] }`.
#[derive(Debug, Clone)]
pub struct JsonLevelSource {
    path: PathBuf,
}

impl JsonLevelSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LevelSource for JsonLevelSource {
    type Error = SourceError;

    fn load_levels(&self) -> Result<Vec<Level>, Self::Error> {
        let json = fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;
        levels_from_json(&json).map_err(|source| SourceError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

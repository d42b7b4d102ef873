//! Connection strings selecting a storage backend.
//!
//! - `memory://` keeps documents in the collection task only.
//! - `file://<dir>` snapshots each collection to `<dir>/<collection>.json`.

use crate::error::StoreError;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StoreUri {
    #[default]
    Memory,
    File(PathBuf),
}

impl StoreUri {
    /// Snapshot file for a collection, if this backend persists anything.
    pub fn snapshot_path(&self, collection: &str) -> Option<PathBuf> {
        match self {
            StoreUri::Memory => None,
            StoreUri::File(dir) => Some(dir.join(format!("{collection}.json"))),
        }
    }
}

impl FromStr for StoreUri {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "memory" || s == "memory://" {
            return Ok(StoreUri::Memory);
        }
        match s.strip_prefix("file://") {
            Some(dir) if !dir.is_empty() => Ok(StoreUri::File(PathBuf::from(dir))),
            _ => Err(StoreError::UnsupportedUri(s.to_string())),
        }
    }
}

impl Display for StoreUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreUri::Memory => f.write_str("memory://"),
            StoreUri::File(dir) => write!(f, "file://{}", dir.display()),
        }
    }
}

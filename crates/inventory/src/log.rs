//! JSON-backed inventory log.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use tally_core::{DomainError, DomainResult, Entity, Repository};

/// Errors from loading or saving the log file.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A keyed store bound to a JSON dump file.
///
/// Save and load failures are returned, never swallowed here; the caller
/// decides whether to log and carry on (the demo policy) or abort.
#[derive(Debug)]
pub struct InventoryLog<T: Entity> {
    path: PathBuf,
    records: Repository<T>,
}

impl<T> InventoryLog<T>
where
    T: Entity + Clone + Serialize + DeserializeOwned,
{
    /// Bind an empty log to `path`. Nothing is read until [`load`](Self::load).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Repository::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn add(&mut self, record: T) -> DomainResult<()> {
        self.records.add(record)
    }

    /// Snapshot of all records. Order is unspecified.
    pub fn records(&self) -> Vec<T> {
        self.records.list_all()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize the records to the file as an indented JSON array.
    pub fn save(&self) -> Result<(), LogError> {
        let json =
            serde_json::to_string_pretty(&self.records.list_all()).map_err(|e| LogError::Encode {
                path: self.path.clone(),
                source: e,
            })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| LogError::Write {
                    path: self.path.clone(),
                    source: e,
                })?;
            }
        }

        fs::write(&self.path, json).map_err(|e| LogError::Write {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Replace the in-memory records with the file's contents, returning how
    /// many were loaded.
    ///
    /// A missing file means "no data": the store is left empty and the load
    /// succeeds. Duplicate ids inside the file surface as
    /// [`DomainError::DuplicateKey`].
    pub fn load(&mut self) -> Result<usize, LogError> {
        self.records = Repository::new();

        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(LogError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        let records: Vec<T> = serde_json::from_str(&json).map_err(|e| LogError::Decode {
            path: self.path.clone(),
            source: e,
        })?;

        let count = records.len();
        for record in records {
            self.records.add(record)?;
        }
        Ok(count)
    }
}

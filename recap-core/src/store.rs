//! The locally cached entry collection.
//!
//! The cache file is a JSON array of entries written by the sync layer. This
//! crate only reads it and hands out snapshots.

use crate::entry::JournalEntry;
use crate::error::QueryError;
use anyhow::anyhow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Entries that loaded, plus whatever went wrong along the way.
#[derive(Debug)]
pub struct QueryResult {
    pub entries: Vec<JournalEntry>,
    pub errors: Vec<QueryError>,
}

/// Reads the cache file at `path`.
///
/// - A missing or blank file is an empty collection, not an error.
/// - Each array element is decoded on its own: a malformed record is skipped
///   and reported as [`QueryError::InvalidEntry`].
/// - A file that cannot be read, or is not a JSON array, yields a single
///   [`QueryError::FileError`] and no entries.
pub fn read_entries(path: &Path) -> QueryResult {
    let mut entries = Vec::new();
    let mut errors = Vec::new();
    if !path.exists() {
        return QueryResult { entries, errors };
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) => {
            errors.push(QueryError::FileError {
                path: path.to_path_buf(),
                error: error.into(),
            });
            return QueryResult { entries, errors };
        }
    };
    if content.trim().is_empty() {
        return QueryResult { entries, errors };
    }

    let records: Vec<serde_json::Value> = match serde_json::from_str(&content) {
        Ok(records) => records,
        Err(error) => {
            errors.push(QueryError::FileError {
                path: path.to_path_buf(),
                error: anyhow!(error).context("expected a JSON array of entries"),
            });
            return QueryResult { entries, errors };
        }
    };

    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<JournalEntry>(record) {
            Ok(entry) => entries.push(entry),
            Err(error) => {
                warn!(index, %error, "skipping malformed entry");
                errors.push(QueryError::InvalidEntry {
                    index,
                    error: error.to_string(),
                });
            }
        }
    }
    QueryResult { entries, errors }
}

/// Read-only holder of the current entry snapshot.
#[derive(Debug)]
pub struct EntryStore {
    path: Option<PathBuf>,
    entries: Vec<JournalEntry>,
    hydrated: bool,
}

impl EntryStore {
    /// A store backed by the cache file at `path`. Nothing is read until
    /// [`hydrate`](Self::hydrate).
    pub fn new(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            entries: Vec::new(),
            hydrated: false,
        }
    }

    /// An in-memory store, hydrated from the start.
    pub fn from_entries(entries: Vec<JournalEntry>) -> Self {
        Self {
            path: None,
            entries,
            hydrated: true,
        }
    }

    /// Loads the cache file, replacing the current snapshot.
    ///
    /// The store counts as hydrated afterwards even if problems were reported.
    pub fn hydrate(&mut self) -> Vec<QueryError> {
        let Some(path) = &self.path else {
            self.hydrated = true;
            return Vec::new();
        };
        let result = read_entries(path);
        info!(
            path = %path.display(),
            entries = result.entries.len(),
            problems = result.errors.len(),
            "entry store loaded"
        );
        self.entries = result.entries;
        self.hydrated = true;
        result.errors
    }

    /// Swaps in a new snapshot, e.g. after a sync.
    pub fn replace(&mut self, entries: Vec<JournalEntry>) {
        self.entries = entries;
        self.hydrated = true;
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

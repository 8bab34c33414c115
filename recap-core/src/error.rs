use std::path::PathBuf;
use thiserror::Error;

/// A non-critical issue found while loading entries.
///
/// These are collected next to the entries that did load instead of aborting
/// the whole read.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("could not process '{}': {error}", .path.display())]
    FileError { path: PathBuf, error: anyhow::Error },
    #[error("entry #{index} is malformed: {error}")]
    InvalidEntry { index: usize, error: String },
}

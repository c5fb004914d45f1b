/// Error types for the triage session
///
/// None of these are fatal: the UI shows them as a notice line
/// and the session keeps running.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Cannot read folder {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Could not delete {path}: {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown RAW format: {0}")]
    UnknownRawFormat(String),
}

pub type TriageResult<T> = Result<T, TriageError>;

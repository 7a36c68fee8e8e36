//! Typed error hierarchy for grind.
//!
//! `GrindError` covers the fatal cases of the sync pipeline and the
//! scaffolder. Recoverable problems (a malformed CSV row, a solution file
//! without a header) never become errors; they are logged and skipped.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrindError {
    #[error("Failed to read track registry at {path}: {source}")]
    RegistryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse track registry at {path}: {source}")]
    RegistryParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open CSV plan at {path}: {source}")]
    CsvOpen {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Unsafe path component '{value}' for {field}")]
    UnsafePathComponent { field: &'static str, value: String },

    #[error("Unknown track '{track}' for type '{kind}': no template at {path}")]
    UnknownTemplate {
        track: String,
        kind: String,
        path: PathBuf,
    },

    #[error("Problem id {0} does not fit a four-digit filename prefix")]
    IdOutOfRange(u32),

    #[error("Refusing to overwrite existing file {0}")]
    AlreadyExists(PathBuf),

    #[error("Track '{0}' is already registered")]
    DuplicateTrack(String),

    #[error("Invalid progress marker pattern: {0}")]
    MarkerPattern(#[from] regex::Error),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The type lookup table is required for slot assignment.
    #[error("cannot load item types from {path}: {reason}")]
    TypeLookup { path: PathBuf, reason: String },

    /// Item map artifact missing; the scraper cannot link equipment without it.
    #[error("item map not found at {0} (run item-map first)")]
    ItemMapMissing(PathBuf),

    #[error("{path}: missing column '{column}'")]
    MissingColumn { path: PathBuf, column: String },

    #[error("{path}, row {row}: invalid {column} value '{value}'")]
    InvalidValue {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
    },

    #[error("wiki request for '{title}' failed: {reason}")]
    Fetch { title: String, reason: String },

    #[error("path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

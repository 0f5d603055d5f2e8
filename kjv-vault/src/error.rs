//! Error taxonomy for a conversion run.
//!
//! `FatalError` aborts the run before any note is written. Input failures,
//! including an input where every entry is rejected, surface before the
//! output root is created. `ValidationError` and `WriteError` are per-record
//! and only ever end up in the run counters (and the debug log).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort the whole run
#[derive(Debug, Error)]
pub enum FatalError {
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON parse error: {0}")]
    InputParse(#[from] serde_json::Error),

    #[error("Unsupported document shape: {0}")]
    UnsupportedShape(String),

    #[error("Input contains no verse records")]
    NoRecords,

    #[error("No usable verse records: all {rejected} entries were rejected")]
    NoUsableRecords { rejected: usize },

    #[error("Failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FatalError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            FatalError::InputNotFound(_) | FatalError::InputRead { .. } => 2,
            FatalError::InputParse(_) => 3,
            FatalError::UnsupportedShape(_) => 4,
            FatalError::NoRecords => 5,
            FatalError::OutputDir { .. } => 6,
            FatalError::NoUsableRecords { .. } => 7,
        }
    }
}

/// Why a single record was rejected by the extractor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("entry is not an object")]
    NotAnObject,

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` is not a positive integer: {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("book name is empty")]
    EmptyBook,

    #[error("verse text is empty")]
    EmptyText,

    #[error("verse text is not a string: {0}")]
    InvalidText(String),

    #[error("duplicate verse: {0}")]
    Duplicate(String),

    #[error("unknown book: {0}")]
    UnknownBook(String),
}

/// Why a validated record could not be written
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to create {path}: {source}")]
    CreateDir {
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
}

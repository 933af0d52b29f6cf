//! Unified application error type.
//! All modules (gpx, core, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::fmt;
use std::io;
use thiserror::Error;

/// Position of a track point inside a document (0-based indices, printed 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointLocation {
    pub track: usize,
    pub segment: usize,
    pub point: usize,
}

impl fmt::Display for PointLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "track #{}, segment #{}, point #{}",
            self.track + 1,
            self.segment + 1,
            self.point + 1
        )
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Document errors
    // ---------------------------
    #[error("XML error: {0}")]
    Xml(String),

    #[error("Invalid GPX document: {0}")]
    InvalidDocument(String),

    #[error("Invalid gpx file structure at {location}: expected 1 time tag, found {found}")]
    TimeFormat {
        location: PointLocation,
        found: usize,
    },

    #[error("Invalid timestamp '{value}' at {location}")]
    TimeParse {
        location: PointLocation,
        value: String,
    },

    // ---------------------------
    // User input
    // ---------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Output file already exists: {0} (use --force to overwrite)")]
    OutputExists(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Report serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Wrap any quick-xml failure (reader, writer, attribute, escaping).
    pub fn xml<E: fmt::Display>(err: E) -> Self {
        AppError::Xml(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

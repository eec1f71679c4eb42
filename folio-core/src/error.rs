//! Error types for the folio site.

use thiserror::Error;

/// Errors that can occur while loading configuration or content.
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fixture is not valid JSON: {0}")]
    FixtureSyntax(#[from] serde_json::Error),

    #[error("Event '{id}' has an invalid {field} date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate {
        id: String,
        field: &'static str,
        value: String,
    },

    #[error("Event '{id}' ends ({end}) before it starts ({start})")]
    EndBeforeStart {
        id: String,
        start: String,
        end: String,
    },

    #[error("Event id '{0}' appears more than once")]
    DuplicateEventId(String),

    #[error("Event at position {0} has an empty id")]
    EmptyEventId(usize),

    #[error("Event '{id}' has an unknown display mode '{value}'")]
    UnknownDisplay { id: String, value: String },

    #[error("Invalid content in '{path}': {message}")]
    Content { path: String, message: String },

    #[error("Duplicate {kind} slug '{slug}'")]
    DuplicateSlug { kind: &'static str, slug: String },

    #[error("Invalid month '{0}' (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Unknown time zone '{0}'")]
    UnknownTimeZone(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for folio operations.
pub type FolioResult<T> = Result<T, FolioError>;

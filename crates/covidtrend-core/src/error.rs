// crates/covidtrend-core/src/error.rs
use thiserror::Error;

/// Errors raised while ingesting data or building a [`crate::TrendEngine`].
///
/// Lookups that simply find nothing are *not* errors: resolvers and rankers
/// fall back to the raw id or an empty string instead.
#[derive(Debug, Error)]
pub enum TrendError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A data row is missing a required field or carries an unparsable value.
    /// `row` is 1-based and counts data rows (the header is not counted).
    #[error("Malformed record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    #[error("Incomplete lookup table: {0}")]
    IncompleteTable(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TrendError>;

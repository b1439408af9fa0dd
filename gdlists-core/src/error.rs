//! Error type shared by the list pipeline.
use thiserror::Error;

/// Result alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Failures raised while loading levels or addressing report files.
///
/// Empty runs are not errors; they surface as `None` from the generators.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("difficulty tier {0} is outside the closed tier table (0..=11)")]
    UnknownTier(u8),
    #[error("unknown sorting code `{0}`")]
    UnknownSortingCode(String),
    #[error("unknown report kind `{0}`")]
    UnknownReportKind(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("level {id} is invalid: {reason}")]
    InvalidLevel { id: i64, reason: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

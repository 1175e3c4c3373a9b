//! Error types and handling.

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Storage blob could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Collection could not be serialized for storage
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Excel export error
    #[error("Export error: {0}")]
    Export(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Record not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Admin login attempted with the wrong password
    #[error("Invalid admin password")]
    InvalidAdminPassword,

    /// Leave request already approved or rejected
    #[error("Leave request {0} has already been decided")]
    AlreadyDecided(String),

    /// Attendance action not allowed in the current state
    #[error("Attendance: {0}")]
    Attendance(String),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a validation error with message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error with message
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an attendance error with message
    pub fn attendance(msg: impl Into<String>) -> Self {
        Self::Attendance(msg.into())
    }
}

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Export(err.to_string())
    }
}

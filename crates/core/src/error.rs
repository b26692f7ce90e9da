//! Error types for cohortboard.

use thiserror::Error;

/// Result type for cohortboard operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors surfaced by the dashboard.
///
/// Library crates keep their own error enums; this type is the common
/// denominator the server maps onto HTTP responses.
#[derive(Debug, Error)]
pub enum BoardError {
    /// A required spreadsheet column is absent.
    #[error("Column '{column}' not found in sheet '{sheet}'")]
    MissingColumn { sheet: String, column: String },

    /// A required form field was not supplied.
    #[error("Missing form field: {0}")]
    MissingField(String),

    /// Spreadsheet source failure.
    #[error("Spreadsheet error: {0}")]
    Sheet(String),

    /// Language-model API failure.
    #[error("Language model error: {0}")]
    Llm(String),

    /// Chart rendering failure.
    #[error("Chart error: {0}")]
    Chart(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal error (should not happen).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BoardError {
    /// Create a missing-column error.
    pub fn missing_column(sheet: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            sheet: sheet.into(),
            column: column.into(),
        }
    }

    /// Create a missing-field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }
}

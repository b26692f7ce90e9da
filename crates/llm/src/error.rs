use thiserror::Error;

/// Errors from the language-model API.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport failure: connection, timeout, TLS.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The API answered with a non-success status.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body was not the expected JSON.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The response carried no choices.
    #[error("No choices in response")]
    EmptyResponse,
}

pub type LlmResult<T> = Result<T, LlmError>;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cohortboard_core::BoardError;
use cohortboard_llm::LlmError;
use cohortboard_sheet::SheetError;
use cohortboard_viz::VizError;

/// Handler error, rendered as a status code with a plain-text body.
#[derive(Debug)]
pub struct AppError(pub BoardError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BoardError::MissingField(_) => StatusCode::BAD_REQUEST,
            BoardError::Llm(_) => StatusCode::BAD_GATEWAY,
            BoardError::Config(_) => StatusCode::SERVICE_UNAVAILABLE,
            BoardError::MissingColumn { .. }
            | BoardError::Sheet(_)
            | BoardError::Chart(_)
            | BoardError::Json(_)
            | BoardError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match &self.0 {
            BoardError::MissingColumn { column, .. } => {
                format!("Error: Column '{column}' not found in the data.")
            }
            BoardError::MissingField(field) => format!("Error: No {field} selected."),
            BoardError::Config(message) => message.clone(),
            other => format!("Error: {other}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        (status, self.message()).into_response()
    }
}

impl From<BoardError> for AppError {
    fn from(err: BoardError) -> Self {
        Self(err)
    }
}

impl From<SheetError> for AppError {
    fn from(err: SheetError) -> Self {
        match err {
            SheetError::MissingColumn { sheet, column } => {
                Self(BoardError::missing_column(sheet, column))
            }
            other => Self(BoardError::Sheet(other.to_string())),
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        Self(BoardError::Llm(err.to_string()))
    }
}

impl From<VizError> for AppError {
    fn from(err: VizError) -> Self {
        Self(BoardError::Chart(err.to_string()))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_team_is_bad_request() {
        let err = AppError(BoardError::missing_field("team"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Error: No team selected.");
    }

    #[test]
    fn test_missing_column_is_server_error() {
        let err: AppError = SheetError::MissingColumn {
            sheet: "updates".into(),
            column: "Revenue generated?".into(),
        }
        .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.message(),
            "Error: Column 'Revenue generated?' not found in the data."
        );
    }

    #[test]
    fn test_unconfigured_service_body_is_bare_message() {
        let err = AppError(BoardError::Config("Language model is not configured.".into()));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.message(), "Language model is not configured.");
    }

    #[test]
    fn test_llm_failure_is_bad_gateway() {
        let err: AppError = LlmError::EmptyResponse.into();
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert!(err.message().contains("No choices"));
    }
}

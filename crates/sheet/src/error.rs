use thiserror::Error;

/// Errors that can occur while loading or mapping a spreadsheet
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Column '{column}' not found in sheet '{sheet}'")]
    MissingColumn { sheet: String, column: String },

    #[error("Spreadsheet {spreadsheet} has no worksheets")]
    NoWorksheets { spreadsheet: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Spreadsheet API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for SheetError {
    fn from(err: reqwest::Error) -> Self {
        SheetError::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SheetError>;

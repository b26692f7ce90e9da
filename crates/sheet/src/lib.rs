//! Spreadsheet snapshots for cohortboard
//!
//! A [`SheetSource`] reads a worksheet into a [`SheetSnapshot`]: the header
//! row plus every data row as text. [`SurveyColumns`] and [`UpdateColumns`]
//! then map a snapshot onto typed rows, failing with a named
//! [`SheetError::MissingColumn`] when the sheet's layout has drifted.
//!
//! # Examples
//!
//! ```
//! use cohortboard_sheet::SheetSnapshot;
//!
//! let snapshot = SheetSnapshot::from_values(
//!     "updates",
//!     vec![
//!         vec!["Startup Name ".to_string(), "Week #".to_string()],
//!         vec!["Acme".to_string(), "1".to_string()],
//!     ],
//! );
//!
//! assert_eq!(snapshot.headers(), &["Startup Name", "Week #"]);
//! assert_eq!(snapshot.column("Startup Name"), Some(vec!["Acme"]));
//! ```

mod csv;
mod error;
mod google;
mod schema;
mod snapshot;
mod source;

/// Re-export CSV source.
pub use csv::{read_csv_values, CsvFileSource};
/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export the Google Sheets source.
pub use google::{GoogleAuth, GoogleSheetsSource, DEFAULT_BASE_URL};
pub use schema::{
    unique_non_empty, StartupUpdate, SurveyColumns, SurveyResponse, UpdateColumns,
    FEEDBACK_WEEK_COLUMN, GOALS_COLUMN, INSIGHTS_COLUMN, MILESTONES_COLUMN,
    MORE_MILESTONES_COLUMN, RECOMMENDATION_COLUMN, REVENUE_COLUMN, STARTUP_COLUMN, TEAM_COLUMN,
    UPDATE_WEEK_COLUMN,
};
pub use snapshot::SheetSnapshot;
pub use source::{SheetSource, StaticSource};

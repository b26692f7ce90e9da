use chrono::{DateTime, Utc};

use crate::error::{Result, SheetError};

/// In-memory copy of one worksheet, taken once and never synchronized.
///
/// Every row has exactly as many cells as there are headers.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetSnapshot {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    loaded_at: DateTime<Utc>,
}

impl SheetSnapshot {
    /// Build a snapshot from a raw grid whose first row is the header.
    ///
    /// Header labels are trimmed. Data rows shorter than the header are padded
    /// with empty strings and longer rows are truncated.
    pub fn from_values(name: impl Into<String>, values: Vec<Vec<String>>) -> Self {
        let mut values = values.into_iter();
        let headers: Vec<String> = values
            .next()
            .map(|row| row.iter().map(|h| h.trim().to_string()).collect())
            .unwrap_or_default();

        let width = headers.len();
        let rows = values
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();

        Self {
            name: name.into(),
            headers,
            rows,
            loaded_at: Utc::now(),
        }
    }

    /// Sheet label used in error messages and logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// When the snapshot was taken.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Position of a column by exact (trimmed) header label.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Position of a column, or a named missing-column error.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| SheetError::MissingColumn {
                sheet: self.name.clone(),
                column: name.to_string(),
            })
    }

    /// All values of a column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[index].as_str()).collect())
    }
}

use async_trait::async_trait;

use crate::error::Result;
use crate::snapshot::SheetSnapshot;

/// Somewhere a worksheet can be read from.
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Label for logs and error messages.
    fn label(&self) -> &str;

    /// Read the whole worksheet into a fresh snapshot.
    async fn fetch(&self) -> Result<SheetSnapshot>;
}

/// A fixed in-memory grid.
#[derive(Debug, Clone)]
pub struct StaticSource {
    label: String,
    values: Vec<Vec<String>>,
}

impl StaticSource {
    pub fn new(label: impl Into<String>, values: Vec<Vec<String>>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    /// Build from string slices, first row being the header.
    pub fn from_rows(label: impl Into<String>, rows: &[&[&str]]) -> Self {
        let values = rows
            .iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect();
        Self::new(label, values)
    }
}

#[async_trait]
impl SheetSource for StaticSource {
    fn label(&self) -> &str {
        &self.label
    }

    async fn fetch(&self) -> Result<SheetSnapshot> {
        Ok(SheetSnapshot::from_values(&self.label, self.values.clone()))
    }
}

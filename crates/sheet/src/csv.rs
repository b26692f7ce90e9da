use async_trait::async_trait;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::snapshot::SheetSnapshot;
use crate::source::SheetSource;

/// A worksheet exported as a CSV file.
///
/// Every field is kept as text; ragged rows are accepted.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    label: String,
    path: PathBuf,
    delimiter: u8,
}

impl CsvFileSource {
    pub fn new(label: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self {
            label: label.into(),
            path: path.as_ref().to_path_buf(),
            delimiter: b',',
        }
    }

    /// Set the delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SheetSource for CsvFileSource {
    fn label(&self) -> &str {
        &self.label
    }

    async fn fetch(&self) -> Result<SheetSnapshot> {
        tracing::debug!(path = %self.path.display(), "reading CSV sheet");
        let bytes = tokio::fs::read(&self.path).await?;
        let values = read_csv_values(bytes.as_slice(), self.delimiter)?;
        Ok(SheetSnapshot::from_values(&self.label, values))
    }
}

/// Read every CSV record as a row of strings, header included.
pub fn read_csv_values<R: Read>(reader: R, delimiter: u8) -> Result<Vec<Vec<String>>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false) // The snapshot handles headers itself
        .flexible(true)
        .from_reader(reader);

    let mut values = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        values.push(record.iter().map(str::to_string).collect());
    }
    Ok(values)
}

//! Google Sheets API v4 source.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::time::Duration;

use crate::error::{Result, SheetError};
use crate::snapshot::SheetSnapshot;
use crate::source::SheetSource;

pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4";

/// How requests to the Sheets API are authorized.
#[derive(Debug, Clone, Default)]
pub enum GoogleAuth {
    /// Public or link-shared sheets, read with an API key.
    ApiKey(String),
    /// OAuth access token, e.g. minted for a service account.
    BearerToken(String),
    #[default]
    Anonymous,
}

/// Reads one worksheet of a Google spreadsheet.
#[derive(Debug, Clone)]
pub struct GoogleSheetsSource {
    client: Client,
    label: String,
    base_url: String,
    spreadsheet_id: String,
    range: Option<String>,
    auth: GoogleAuth,
}

#[derive(Deserialize)]
struct SpreadsheetMetadata {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<JsonValue>>,
}

#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl GoogleSheetsSource {
    /// Source for the first worksheet of `spreadsheet_id`.
    ///
    /// # Errors
    ///
    /// Returns `SheetError::Http` if building the underlying HTTP client fails.
    pub fn new(
        label: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        auth: GoogleAuth,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            label: label.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            spreadsheet_id: spreadsheet_id.into(),
            range: None,
            auth,
        })
    }

    /// Point at another API root (used for testing against a mock server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Read this A1 range or worksheet title instead of the first worksheet.
    #[must_use]
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = Some(range.into());
        self
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| SheetError::Parse(format!("invalid base URL '{}': {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| SheetError::Parse(format!("base URL '{}' cannot have a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            GoogleAuth::ApiKey(key) => request.query(&[("key", key)]),
            GoogleAuth::BearerToken(token) => request.bearer_auth(token),
            GoogleAuth::Anonymous => request,
        }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.authorize(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(SheetError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| SheetError::Parse(format!("Failed to parse JSON: {e}")))
    }

    /// Title of the spreadsheet's first worksheet.
    async fn first_sheet_title(&self) -> Result<String> {
        let url = self.url(&["spreadsheets", &self.spreadsheet_id])?;
        let request = self
            .client
            .get(url)
            .query(&[("fields", "sheets.properties.title")]);
        let metadata: SpreadsheetMetadata = self.get_json(request).await?;

        metadata
            .sheets
            .into_iter()
            .next()
            .map(|sheet| sheet.properties.title)
            .ok_or_else(|| SheetError::NoWorksheets {
                spreadsheet: self.spreadsheet_id.clone(),
            })
    }
}

#[async_trait]
impl SheetSource for GoogleSheetsSource {
    fn label(&self) -> &str {
        &self.label
    }

    async fn fetch(&self) -> Result<SheetSnapshot> {
        let range = match &self.range {
            Some(range) => range.clone(),
            None => self.first_sheet_title().await?,
        };

        tracing::debug!(spreadsheet = %self.spreadsheet_id, %range, "fetching sheet values");
        let url = self.url(&["spreadsheets", &self.spreadsheet_id, "values", &range])?;
        let value_range: ValueRange = self.get_json(self.client.get(url)).await?;

        let values = value_range
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect();

        Ok(SheetSnapshot::from_values(&self.label, values))
    }
}

/// Formatted values arrive as strings; anything else is rendered as its JSON text.
fn cell_text(value: JsonValue) -> String {
    match value {
        JsonValue::String(s) => s,
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

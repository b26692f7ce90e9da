//! Command-line and environment configuration.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use cohortboard_core::{BoardError, BoardResult};
use cohortboard_llm::{CompletionClient, OpenAiClient};
use cohortboard_sheet::{CsvFileSource, GoogleAuth, GoogleSheetsSource, SheetSource};

use crate::context::DataLoader;

pub const DEFAULT_SURVEY_SHEET_ID: &str = "1M5r9nur77ztePFtZebZJ3MwVCKhnZemE4zvNvglqrlQ";
pub const DEFAULT_UPDATES_SHEET_ID: &str = "1dPUSoKZU5H_ygtSmWevdD1Xyy7NloMMRztiaSpqsJ4Q";

/// cohortboard - cohort survey and startup progress dashboard
#[derive(Debug, Clone, Parser)]
#[command(name = "cohortboard")]
#[command(author, version, about = "Cohort survey and startup progress dashboard", long_about = None)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, env = "COHORTBOARD_BIND", default_value = "127.0.0.1:5000")]
    pub bind: String,

    /// Google spreadsheet id of the workshop feedback survey
    #[arg(long, env = "COHORTBOARD_SURVEY_SHEET_ID", default_value = DEFAULT_SURVEY_SHEET_ID)]
    pub survey_sheet_id: String,

    /// Google spreadsheet id of the weekly startup updates
    #[arg(long, env = "COHORTBOARD_UPDATES_SHEET_ID", default_value = DEFAULT_UPDATES_SHEET_ID)]
    pub updates_sheet_id: String,

    /// Read the survey from a CSV file instead of Google Sheets
    #[arg(long, env = "COHORTBOARD_SURVEY_CSV", value_name = "FILE")]
    pub survey_csv: Option<PathBuf>,

    /// Read the startup updates from a CSV file instead of Google Sheets
    #[arg(long, env = "COHORTBOARD_UPDATES_CSV", value_name = "FILE")]
    pub updates_csv: Option<PathBuf>,

    /// Google API key for the Sheets API
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub google_api_key: Option<String>,

    /// OAuth access token for the Sheets API (takes precedence over the API key)
    #[arg(long, env = "GOOGLE_ACCESS_TOKEN", hide_env_values = true)]
    pub google_access_token: Option<String>,

    /// Sheets API root
    #[arg(long, env = "COHORTBOARD_SHEETS_BASE_URL", default_value = cohortboard_sheet::DEFAULT_BASE_URL)]
    pub sheets_base_url: String,

    /// API key for the language model
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// Chat-completion API root
    #[arg(long, env = "OPENAI_BASE_URL", default_value = cohortboard_llm::DEFAULT_BASE_URL)]
    pub openai_base_url: String,

    /// Model used for the goal review
    #[arg(long, env = "COHORTBOARD_MODEL", default_value = cohortboard_llm::DEFAULT_MODEL)]
    pub model: String,

    /// Reload both spreadsheets every N seconds
    #[arg(long, env = "COHORTBOARD_REFRESH_INTERVAL_SECS", value_name = "SECS")]
    pub refresh_interval_secs: Option<u64>,

    /// Timeout for language-model requests
    #[arg(long, env = "COHORTBOARD_REQUEST_TIMEOUT_SECS", default_value_t = 60)]
    pub request_timeout_secs: u64,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn google_auth(&self) -> GoogleAuth {
        if let Some(token) = &self.google_access_token {
            GoogleAuth::BearerToken(token.clone())
        } else if let Some(key) = &self.google_api_key {
            GoogleAuth::ApiKey(key.clone())
        } else {
            GoogleAuth::Anonymous
        }
    }

    fn source(
        &self,
        label: &str,
        csv: Option<&PathBuf>,
        sheet_id: &str,
    ) -> BoardResult<Arc<dyn SheetSource>> {
        if let Some(path) = csv {
            let source: Arc<dyn SheetSource> = Arc::new(CsvFileSource::new(label, path));
            return Ok(source);
        }

        let source = GoogleSheetsSource::new(label, sheet_id, self.google_auth())
            .map_err(|e| BoardError::Config(e.to_string()))?
            .with_base_url(&self.sheets_base_url);
        let source: Arc<dyn SheetSource> = Arc::new(source);
        Ok(source)
    }

    /// Build the spreadsheet loader described by the flags.
    pub fn loader(&self) -> BoardResult<DataLoader> {
        let survey = self.source("survey", self.survey_csv.as_ref(), &self.survey_sheet_id)?;
        let updates = self.source("updates", self.updates_csv.as_ref(), &self.updates_sheet_id)?;
        Ok(DataLoader::new(survey, updates))
    }

    /// Language-model client, if an API key was supplied.
    pub fn completion_client(&self) -> BoardResult<Option<Arc<dyn CompletionClient>>> {
        let Some(key) = &self.openai_api_key else {
            return Ok(None);
        };

        let client = OpenAiClient::with_timeout(key.clone(), self.request_timeout_secs)
            .map_err(|e| BoardError::Config(e.to_string()))?
            .with_base_url(&self.openai_base_url);
        let client: Arc<dyn CompletionClient> = Arc::new(client);
        Ok(Some(client))
    }

    pub fn refresh_interval(&self) -> Option<Duration> {
        self.refresh_interval_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

//! Read-only spreadsheet data shared by every request, and how it is reloaded.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use cohortboard_llm::CompletionClient;
use cohortboard_sheet::{
    unique_non_empty, Result as SheetResult, SheetSource, StartupUpdate, SurveyColumns, SurveyResponse,
    UpdateColumns,
};
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

/// Both sheets, validated and mapped at load time.
#[derive(Debug, Clone)]
pub struct DataContext {
    survey: Vec<SurveyResponse>,
    updates: Vec<StartupUpdate>,
    loaded_at: DateTime<Utc>,
}

impl DataContext {
    pub fn new(survey: Vec<SurveyResponse>, updates: Vec<StartupUpdate>) -> Self {
        Self {
            survey,
            updates,
            loaded_at: Utc::now(),
        }
    }

    pub fn survey(&self) -> &[SurveyResponse] {
        &self.survey
    }

    pub fn updates(&self) -> &[StartupUpdate] {
        &self.updates
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Team names for the selector, in sheet order.
    pub fn teams(&self) -> Vec<String> {
        unique_non_empty(self.survey.iter().map(|row| row.team.as_str()))
    }

    /// Startup names for the selector, in sheet order.
    pub fn startups(&self) -> Vec<String> {
        unique_non_empty(self.updates.iter().map(|row| row.startup.as_str()))
    }

    pub fn survey_for_team<'a>(&'a self, team: &'a str) -> impl Iterator<Item = &'a SurveyResponse> {
        self.survey.iter().filter(move |row| row.team == team)
    }

    pub fn updates_for_startup<'a>(
        &'a self,
        startup: &'a str,
    ) -> impl Iterator<Item = &'a StartupUpdate> {
        self.updates.iter().filter(move |row| row.startup == startup)
    }
}

/// Where the two sheets come from and how their columns are named.
#[derive(Clone)]
pub struct DataLoader {
    survey: Arc<dyn SheetSource>,
    updates: Arc<dyn SheetSource>,
    survey_columns: SurveyColumns,
    update_columns: UpdateColumns,
}

impl DataLoader {
    pub fn new(survey: Arc<dyn SheetSource>, updates: Arc<dyn SheetSource>) -> Self {
        Self {
            survey,
            updates,
            survey_columns: SurveyColumns::default(),
            update_columns: UpdateColumns::default(),
        }
    }

    #[must_use]
    pub fn with_columns(mut self, survey: SurveyColumns, updates: UpdateColumns) -> Self {
        self.survey_columns = survey;
        self.update_columns = updates;
        self
    }

    /// Fetch both sheets concurrently and map them onto typed rows.
    pub async fn load(&self) -> SheetResult<DataContext> {
        let (survey, updates) = futures::try_join!(self.survey.fetch(), self.updates.fetch())?;

        let context = DataContext::new(
            self.survey_columns.map(&survey)?,
            self.update_columns.map(&updates)?,
        );
        tracing::info!(
            survey = %self.survey.label(),
            updates = %self.updates.label(),
            survey_rows = context.survey.len(),
            update_rows = context.updates.len(),
            "spreadsheets loaded"
        );
        Ok(context)
    }
}

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<StateInner>,
}

struct StateInner {
    context: RwLock<Arc<DataContext>>,
    refresh_lock: Mutex<()>,
    loader: DataLoader,
    llm: Option<Arc<dyn CompletionClient>>,
    model: String,
}

impl AppState {
    pub fn new(
        context: DataContext,
        loader: DataLoader,
        llm: Option<Arc<dyn CompletionClient>>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            inner: Arc::new(StateInner {
                context: RwLock::new(Arc::new(context)),
                refresh_lock: Mutex::new(()),
                loader,
                llm,
                model: model.into(),
            }),
        }
    }

    /// The current snapshot. Later refreshes do not affect the returned value.
    pub async fn context(&self) -> Arc<DataContext> {
        Arc::clone(&*self.inner.context.read().await)
    }

    /// Reload both sheets and swap them in. On failure the previous data stays.
    ///
    /// Refreshes run one at a time, so the context always comes from the most
    /// recently started load.
    pub async fn refresh(&self) -> SheetResult<Arc<DataContext>> {
        let _serial = self.inner.refresh_lock.lock().await;
        let fresh = Arc::new(self.inner.loader.load().await?);
        *self.inner.context.write().await = Arc::clone(&fresh);
        Ok(fresh)
    }

    pub fn llm(&self) -> Option<&Arc<dyn CompletionClient>> {
        self.inner.llm.as_ref()
    }

    pub fn model(&self) -> &str {
        &self.inner.model
    }
}

/// Reload the sheets on a fixed interval until the task is aborted.
pub fn spawn_refresh_task(state: AppState, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick completes immediately; the data was just loaded.
        interval.tick().await;

        loop {
            interval.tick().await;
            if let Err(err) = state.refresh().await {
                tracing::warn!(error = %err, "scheduled refresh failed, keeping previous data");
            }
        }
    })
}

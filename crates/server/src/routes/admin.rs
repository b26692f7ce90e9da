use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::context::AppState;
use crate::error::AppResult;

/// Health check response.
#[derive(Serialize, Deserialize)]
pub struct Health {
    /// Server status ("ok" when healthy).
    pub status: String,
    /// Server version from Cargo.toml.
    pub version: String,
}

/// Health check endpoint handler.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Result of a manual reload.
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshSummary {
    pub survey_rows: usize,
    pub update_rows: usize,
    pub loaded_at: String,
}

/// Reload both spreadsheets now.
pub async fn refresh(State(state): State<AppState>) -> AppResult<Json<RefreshSummary>> {
    let context = state.refresh().await?;
    tracing::info!(loaded_at = %context.loaded_at(), "manual refresh complete");

    Ok(Json(RefreshSummary {
        survey_rows: context.survey().len(),
        update_rows: context.updates().len(),
        loaded_at: context.loaded_at().to_rfc3339(),
    }))
}

//! # cohortboard-server
//!
//! HTTP front end for the cohort dashboard.
//!
//! Routes:
//! - `GET /` team and startup selector
//! - `POST /visualize` three bar charts for the selection
//! - `POST /get_response` model-written weekly goal review as an HTML table
//! - `POST /refresh` reload both spreadsheets
//! - `GET /health` liveness check

pub mod config;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod routes;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::Cli;
pub use context::{spawn_refresh_task, AppState, DataContext, DataLoader};
pub use error::{AppError, AppResult};

/// Create the application router.
///
/// This is separated from `main()` to allow testing.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::pages::index))
        .route("/visualize", post(routes::pages::visualize))
        .route("/get_response", post(routes::summary::get_response))
        .route("/refresh", post(routes::admin::refresh))
        .route("/health", get(routes::admin::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

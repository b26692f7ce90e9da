use anyhow::{Context, Result};
use clap::Parser;
use cohortboard_server::{create_router, spawn_refresh_task, AppState, Cli};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let loader = cli.loader().context("Failed to configure spreadsheet sources")?;
    let context = loader
        .load()
        .await
        .context("Failed to load spreadsheets")?;

    let llm = cli
        .completion_client()
        .context("Failed to configure language model client")?;
    if llm.is_none() {
        tracing::warn!("OPENAI_API_KEY not set; /get_response will be unavailable");
    }

    let state = AppState::new(context, loader, llm, cli.model.clone());

    if let Some(every) = cli.refresh_interval() {
        tracing::info!(interval_secs = every.as_secs(), "scheduled refresh enabled");
        spawn_refresh_task(state.clone(), every);
    }

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&cli.bind)
        .await
        .with_context(|| format!("Failed to bind {}", cli.bind))?;
    tracing::info!("cohortboard listening on {}", cli.bind);

    axum::serve(listener, app).await?;

    Ok(())
}

use axum::extract::State;
use axum::Json;
use cohortboard_core::BoardError;
use cohortboard_llm::{goal_review_prompt, ChatRequest};
use cohortboard_markdown::{parse_model_response, render_html_table};
use serde::{Deserialize, Serialize};

use crate::context::AppState;
use crate::error::AppResult;

pub const NO_DATA_MESSAGE: &str = "No data was parsed. Please check the input format.";

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub response: String,
}

/// Ask the model to review every startup's goals and return its table as HTML.
pub async fn get_response(State(state): State<AppState>) -> AppResult<Json<SummaryResponse>> {
    let Some(llm) = state.llm() else {
        return Err(BoardError::Config("Language model is not configured.".to_string()).into());
    };

    let context = state.context().await;
    let request = ChatRequest::new(goal_review_prompt(context.updates())).with_model(state.model());
    let text = llm.complete(&request).await?;

    let table = parse_model_response(&text);
    for skipped in &table.skipped {
        tracing::warn!(
            line = skipped.line_number,
            expected = skipped.expected,
            found = skipped.found,
            "dropped malformed table row from model response"
        );
    }

    let response = if table.is_empty() {
        tracing::warn!(response_len = text.len(), "model response contained no table rows");
        NO_DATA_MESSAGE.to_string()
    } else {
        render_html_table(&table, "table table-striped")
    };

    Ok(Json(SummaryResponse { response }))
}

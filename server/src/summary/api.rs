use crate::slack::Notifier;
use crate::summarizer::{Summarizer, SummarizerError};
use crate::summary::{SummaryService, SummaryServiceError};
use crate::todo::{TodoService, TodoServiceError};
use crate::web::api::ErrorResponse;
use axum::{Router, extract::State, http::StatusCode, response::Json, routing::post};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state for the summarize route. The summarizer and notifier are
/// constructed once at startup and injected here.
#[derive(Clone)]
pub struct SummarizeState {
    pub db: Arc<sea_orm::DatabaseConnection>,
    pub summarizer: Arc<dyn Summarizer>,
    pub notifier: Arc<dyn Notifier>,
}

/// Response body for the summarize endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
}

impl SummarizeResponse {
    /// Returns the outcome message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the generated summary text, if one was produced.
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }
}

/// Internal error type for the summarize workflow. Every variant collapses
/// to the same generic 500 at the handler boundary.
#[derive(Debug, thiserror::Error)]
enum SummarizeError {
    #[error("Todo store error: {0}")]
    TodoStore(#[from] TodoServiceError),
    #[error("Summary store error: {0}")]
    SummaryStore(#[from] SummaryServiceError),
    #[error("Summarization failed: {0}")]
    Summarizer(#[from] SummarizerError),
}

/// Runs the fixed summarize sequence: fetch todos, generate, persist,
/// attempt delivery, record delivery. Notification failure does not abort
/// the workflow; everything else does.
async fn run_summarize(state: &SummarizeState) -> Result<SummarizeResponse, SummarizeError> {
    let todos = TodoService::new(&state.db).get_all_todos().await?;

    if todos.is_empty() {
        return Ok(SummarizeResponse {
            message: "No todos to summarize".to_string(),
            summary: None,
        });
    }

    let summary_text = state.summarizer.summarize(&todos).await?;

    let summary_service = SummaryService::new(&state.db);
    let saved_summary = summary_service.create_summary(summary_text.clone()).await?;

    let slack_sent = state.notifier.send(&summary_text).await;

    if slack_sent {
        summary_service.mark_sent(saved_summary.id()).await?;
    }

    let message = if slack_sent {
        "Todos summarized and sent to Slack"
    } else {
        "Todos summarized but failed to send to Slack"
    };

    Ok(SummarizeResponse {
        message: message.to_string(),
        summary: Some(summary_text),
    })
}

/// Handler for POST /summarize.
#[tracing::instrument(skip(state))]
pub async fn summarize_handler(
    State(state): State<Arc<SummarizeState>>,
) -> Result<Json<SummarizeResponse>, (StatusCode, Json<ErrorResponse>)> {
    match run_summarize(&state).await {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            tracing::error!("Summarization error: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to summarize todos".to_string())),
            ))
        }
    }
}

/// Creates and returns the summarize API router.
pub fn create_summarize_router(state: Arc<SummarizeState>) -> Router {
    Router::new()
        .route("/summarize", post(summarize_handler))
        .with_state(state)
}

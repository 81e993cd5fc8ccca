//! Completion-API client for turning the current todo list into a short
//! actionable summary.

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::todo::Todo;

const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that summarizes todo items in a concise and actionable way.";
const MAX_OUTPUT_TOKENS: u32 = 500;

/// Error type for summarization calls.
#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    /// Represents a transport-level failure talking to the provider.
    #[error("Completion API request failed: {0}")]
    Http(String),
    /// Represents an error status or malformed payload from the provider.
    #[error("Completion API error: {0}")]
    Api(String),
}

/// Generates a text summary for an ordered sequence of todos.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, todos: &[Todo]) -> Result<String, SummarizerError>;
}

/// Summarizer backed by an OpenAI-compatible chat-completion endpoint.
pub struct OpenAiSummarizer {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiSummarizer {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url,
            model,
        }
    }
}

/// Renders todos as the bullet list embedded in the prompt, one line per todo.
fn build_todo_block(todos: &[Todo]) -> String {
    todos
        .iter()
        .map(|todo| {
            let description = match todo.description() {
                Some(description) if !description.is_empty() => description,
                _ => "No description",
            };
            format!("- {}: {}", todo.title(), description)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    #[tracing::instrument(skip(self, todos))]
    async fn summarize(&self, todos: &[Todo]) -> Result<String, SummarizerError> {
        let todo_block = build_todo_block(todos);
        tracing::info!("Generating summary for {} todos", todos.len());

        let request_body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": SYSTEM_PROMPT,
                },
                {
                    "role": "user",
                    "content": format!("Please summarize these todo items:\n{}", todo_block),
                },
            ],
            "max_tokens": MAX_OUTPUT_TOKENS,
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummarizerError::Http(format!("Completion API request failed: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SummarizerError::Api(error_text));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| SummarizerError::Api(format!("Failed to parse response: {}", e)))?;

        // The provider occasionally returns a choice with no content; callers
        // get empty text rather than an error in that case.
        let content = response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .unwrap_or_default()
            .to_string();

        Ok(content)
    }
}

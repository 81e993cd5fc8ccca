//! Thin JSON client for the tasksum server API.

use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Base URL of the API service, baked in at build time.
fn api_base_url() -> &'static str {
    option_env!("TASKSUM_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// A todo record as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub created_at: String,
}

/// Response of the summarize endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SummarizeResponse {
    pub message: String,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Error type for API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Fetches all todos.
pub async fn fetch_todos() -> Result<Vec<Todo>, ApiError> {
    let todos = reqwest::get(format!("{}/todos", api_base_url()))
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(todos)
}

/// Creates a todo and returns the stored record.
pub async fn create_todo(title: &str, description: &str) -> Result<Todo, ApiError> {
    let todo = reqwest::Client::new()
        .post(format!("{}/todos", api_base_url()))
        .json(&serde_json::json!({ "title": title, "description": description }))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(todo)
}

/// Deletes a todo by its ID.
pub async fn delete_todo(id: i32) -> Result<(), ApiError> {
    reqwest::Client::new()
        .delete(format!("{}/todos/{}", api_base_url(), id))
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

/// Requests a summary of all todos.
pub async fn summarize() -> Result<SummarizeResponse, ApiError> {
    let response = reqwest::Client::new()
        .post(format!("{}/summarize", api_base_url()))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_parses_camel_case_wire_format() {
        let todo: Todo = serde_json::from_str(
            r#"{"id": 1, "title": "Buy milk", "description": null, "createdAt": "2025-07-18T12:00:00Z"}"#,
        )
        .expect("todo should deserialize");

        assert_eq!(todo.id, 1);
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.description, None);
        assert_eq!(todo.created_at, "2025-07-18T12:00:00Z");
    }

    #[test]
    fn summarize_response_tolerates_missing_summary() {
        let response: SummarizeResponse =
            serde_json::from_str(r#"{"message": "No todos to summarize"}"#)
                .expect("response should deserialize");

        assert_eq!(response.message, "No todos to summarize");
        assert_eq!(response.summary, None);
    }
}

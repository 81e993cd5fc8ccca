use crate::todo::{Todo, TodoService, TodoServiceError};
use crate::web::api::ErrorResponse;
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state for the todo routes.
#[derive(Clone)]
pub struct TodoState {
    pub db: Arc<sea_orm::DatabaseConnection>,
}

/// JSON representation of a Todo for API responses.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoJson {
    /// Unique identifier for the todo
    id: i32,
    /// Short title of the task
    title: String,
    /// Optional free-form description
    description: Option<String>,
    /// Creation timestamp assigned by the store
    created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl TodoJson {
    /// Returns the ID of the todo.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Returns the title of the todo.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description of the todo, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the creation timestamp of the todo.
    pub fn created_at(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.created_at
    }
}

impl From<Todo> for TodoJson {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id(),
            title: todo.title().to_string(),
            description: todo.description().map(str::to_string),
            created_at: todo.created_at(),
        }
    }
}

/// Request body for creating a todo.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    title: String,
    #[serde(default)]
    description: Option<String>,
}

/// Response body for a successful deletion.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteTodoResponse {
    message: String,
}

impl DeleteTodoResponse {
    /// Returns the confirmation message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Handler for GET /todos - returns all todos in insertion order.
#[tracing::instrument(skip(state))]
pub async fn get_todos_handler(
    State(state): State<Arc<TodoState>>,
) -> Result<Json<Vec<TodoJson>>, (StatusCode, Json<ErrorResponse>)> {
    let service = TodoService::new(&state.db);

    match service.get_all_todos().await {
        Ok(todos) => Ok(Json(todos.into_iter().map(TodoJson::from).collect())),
        Err(err) => {
            tracing::error!("Failed to get todos: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to fetch todos".to_string())),
            ))
        }
    }
}

/// Handler for POST /todos - creates a todo and returns it with 201.
#[tracing::instrument(skip(state, request))]
pub async fn create_todo_handler(
    State(state): State<Arc<TodoState>>,
    Json(request): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoJson>), (StatusCode, Json<ErrorResponse>)> {
    if request.title.trim().is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new("Title must not be empty".to_string())),
        ));
    }

    let service = TodoService::new(&state.db);

    match service
        .create_todo(request.title, request.description)
        .await
    {
        Ok(todo) => Ok((StatusCode::CREATED, Json(TodoJson::from(todo)))),
        Err(err) => {
            tracing::error!("Failed to create todo: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to create todo".to_string())),
            ))
        }
    }
}

/// Handler for DELETE /todos/{id} - deletes a todo by its ID.
#[tracing::instrument(skip(state))]
pub async fn delete_todo_handler(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteTodoResponse>, (StatusCode, Json<ErrorResponse>)> {
    let service = TodoService::new(&state.db);

    match service.delete_todo_by_id(id).await {
        Ok(_) => Ok(Json(DeleteTodoResponse {
            message: "Todo deleted successfully".to_string(),
        })),
        Err(TodoServiceError::TodoNotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Todo not found".to_string())),
        )),
        Err(err) => {
            tracing::error!("Failed to delete todo {}: {}", id, err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to delete todo".to_string())),
            ))
        }
    }
}

/// Creates and returns the todos API router.
pub fn create_todo_router(state: Arc<TodoState>) -> Router {
    Router::new()
        .route("/todos", get(get_todos_handler).post(create_todo_handler))
        .route("/todos/{id}", delete(delete_todo_handler))
        .with_state(state)
}

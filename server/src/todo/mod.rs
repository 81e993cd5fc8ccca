use crate::entities::*;
use sea_orm::*;

pub mod api;

#[derive(Debug, PartialEq, Clone, Eq)]
pub struct Todo {
    id: i32,
    title: String,
    description: Option<String>,
    created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl Todo {
    pub fn new(
        id: i32,
        title: String,
        description: Option<String>,
        created_at: chrono::DateTime<chrono::FixedOffset>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            created_at,
        }
    }

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

impl From<todo::Model> for Todo {
    fn from(model: todo::Model) -> Self {
        Todo::new(model.id, model.title, model.description, model.created_at)
    }
}

/// Error type for TodoService operations.
#[derive(Debug, thiserror::Error)]
pub enum TodoServiceError {
    /// Represents a database error.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
    /// Represents a todo not found error.
    #[error("Todo with ID {0} not found")]
    TodoNotFound(i32),
}

pub struct TodoService<'a> {
    db: &'a sea_orm::DatabaseConnection,
}

impl TodoService<'_> {
    pub fn new(db: &sea_orm::DatabaseConnection) -> TodoService {
        TodoService { db }
    }

    /// Retrieves all todos from the database in insertion order.
    ///
    /// # Returns
    ///
    /// A `Result` containing a vector of `Todo` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn get_all_todos(&self) -> Result<Vec<Todo>, TodoServiceError> {
        let todos = todo::Entity::find()
            .order_by_asc(todo::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Todo::from)
            .collect();
        Ok(todos)
    }

    /// Creates a new todo in the database.
    ///
    /// # Arguments
    ///
    /// * `title` - The title of the todo.
    /// * `description` - An optional free-form description.
    ///
    /// # Returns
    ///
    /// A `Result` containing the created `Todo` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn create_todo(
        &self,
        title: String,
        description: Option<String>,
    ) -> Result<Todo, TodoServiceError> {
        let active_model = todo::ActiveModel {
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            created_at: ActiveValue::Set(chrono::Utc::now().into()),
            ..Default::default()
        };
        let created_model = active_model.insert(self.db).await?;
        Ok(Todo::from(created_model))
    }

    /// Deletes a todo by its ID.
    ///
    /// # Arguments
    ///
    /// * `id` - The ID of the todo to delete.
    ///
    /// # Returns
    ///
    /// A `Result` containing the deleted `Todo` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn delete_todo_by_id(&self, id: i32) -> Result<Todo, TodoServiceError> {
        let todo_to_delete = todo::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(TodoServiceError::TodoNotFound(id))?;

        let todo_copy = Todo::from(todo_to_delete);
        todo::Entity::delete_by_id(id).exec(self.db).await?;
        Ok(todo_copy)
    }
}

use crate::entities::*;
use sea_orm::*;

pub mod api;

#[derive(Debug, PartialEq, Clone, Eq)]
pub struct Summary {
    id: i32,
    content: String,
    sent_to_slack: bool,
}

impl Summary {
    pub fn new(id: i32, content: String, sent_to_slack: bool) -> Self {
        Self {
            id,
            content,
            sent_to_slack,
        }
    }

    /// Returns the ID of the summary.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Returns the generated summary text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns whether the summary was delivered to Slack.
    pub fn sent_to_slack(&self) -> bool {
        self.sent_to_slack
    }
}

impl From<summary::Model> for Summary {
    fn from(model: summary::Model) -> Self {
        Summary::new(model.id, model.content, model.sent_to_slack)
    }
}

/// Error type for SummaryService operations.
#[derive(Debug, thiserror::Error)]
pub enum SummaryServiceError {
    /// Represents a database error.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
    /// Represents a summary not found error.
    #[error("Summary with ID {0} not found")]
    SummaryNotFound(i32),
}

pub struct SummaryService<'a> {
    db: &'a sea_orm::DatabaseConnection,
}

impl SummaryService<'_> {
    pub fn new(db: &sea_orm::DatabaseConnection) -> SummaryService {
        SummaryService { db }
    }

    /// Persists a freshly generated summary. Delivery has not been attempted
    /// yet, so the record starts with `sent_to_slack` set to false.
    ///
    /// # Arguments
    ///
    /// * `content` - The generated summary text.
    ///
    /// # Returns
    ///
    /// A `Result` containing the created `Summary` if successful, or an error otherwise.
    #[tracing::instrument(skip(self, content))]
    pub async fn create_summary(&self, content: String) -> Result<Summary, SummaryServiceError> {
        let active_model = summary::ActiveModel {
            content: ActiveValue::Set(content),
            sent_to_slack: ActiveValue::Set(false),
            created_at: ActiveValue::Set(chrono::Utc::now().into()),
            ..Default::default()
        };
        let created_model = active_model.insert(self.db).await?;
        Ok(Summary::from(created_model))
    }

    /// Marks a summary as delivered to Slack.
    ///
    /// # Arguments
    ///
    /// * `id` - The ID of the summary to update.
    ///
    /// # Returns
    ///
    /// A `Result` containing the updated `Summary` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn mark_sent(&self, id: i32) -> Result<Summary, SummaryServiceError> {
        let summary_to_update = summary::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(SummaryServiceError::SummaryNotFound(id))?;

        let mut active_model: summary::ActiveModel = summary_to_update.into();
        active_model.sent_to_slack = ActiveValue::Set(true);
        let updated_model = active_model.update(self.db).await?;

        Ok(Summary::from(updated_model))
    }

    /// Retrieves all stored summaries in insertion order.
    ///
    /// # Returns
    ///
    /// A `Result` containing a vector of `Summary` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn get_all_summaries(&self) -> Result<Vec<Summary>, SummaryServiceError> {
        let summaries = summary::Entity::find()
            .order_by_asc(summary::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Summary::from)
            .collect();
        Ok(summaries)
    }
}

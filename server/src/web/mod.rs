use axum::Router;
use axum::response::Json;
use migration::MigratorTrait;
use sea_orm::Database;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::slack::SlackNotifier;
use crate::summarizer::OpenAiSummarizer;
use crate::summary::api::{SummarizeState, create_summarize_router};
use crate::todo::api::{TodoState, create_todo_router};

pub mod api;

/// Response body for the health check endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    health: String,
}

impl HealthResponse {
    /// Returns the reported health status.
    pub fn health(&self) -> &str {
        &self.health
    }
}

/// Handler for GET / - liveness probe.
#[tracing::instrument]
pub async fn health_check_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        health: "OK".to_string(),
    })
}

#[tracing::instrument(skip(config))]
pub async fn start_web_server(config: Config) -> anyhow::Result<()> {
    let server_address = format!("0.0.0.0:{}", &config.port);
    let listener = tokio::net::TcpListener::bind(&server_address).await?;
    tracing::info!("Web server running on http://{}", server_address);

    let db = Database::connect(&config.db_url).await?;
    migration::Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied successfully");

    let db = Arc::new(db);

    let todo_state = Arc::new(TodoState { db: db.clone() });

    let summarize_state = Arc::new(SummarizeState {
        db,
        summarizer: Arc::new(OpenAiSummarizer::new(
            config.openai_api_key.clone(),
            config.openai_base_url.clone(),
            config.openai_model.clone(),
        )),
        notifier: Arc::new(SlackNotifier::new(config.slack_webhook_url.clone())),
    });

    let app = Router::new()
        .route("/", axum::routing::get(health_check_handler))
        .merge(create_todo_router(todo_state))
        .merge(create_summarize_router(summarize_state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // The browser client is served from another origin.
                .layer(CorsLayer::permissive()),
        );

    axum::serve(listener, app).await?;
    Ok(())
}

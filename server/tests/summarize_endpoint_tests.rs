use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use mockall::mock;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};
use std::sync::Arc;
use tasksum_server::entities::todo;
use tasksum_server::slack::Notifier;
use tasksum_server::summarizer::{Summarizer, SummarizerError};
use tasksum_server::summary::SummaryService;
use tasksum_server::summary::api::{SummarizeResponse, SummarizeState, create_summarize_router};
use tasksum_server::todo::Todo;
use tasksum_server::web::api::ErrorResponse;
use tower::ServiceExt;

mod common;

mock! {
    pub TestSummarizer {}

    #[async_trait]
    impl Summarizer for TestSummarizer {
        async fn summarize(&self, todos: &[Todo]) -> Result<String, SummarizerError>;
    }
}

mock! {
    pub TestNotifier {}

    #[async_trait]
    impl Notifier for TestNotifier {
        async fn send(&self, summary: &str) -> bool;
    }
}

async fn setup() -> anyhow::Result<DatabaseConnection> {
    // Allow multiple calls to init for tests.
    let _ = tracing_subscriber::fmt().try_init();
    common::setup_db().await
}

/// Test helper to seed a couple of todos.
async fn create_test_todos(db: &DatabaseConnection) {
    for (title, description) in [
        ("Buy milk", Some("Two liters".to_string())),
        ("Walk the dog", None),
    ] {
        let todo = todo::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(description),
            created_at: ActiveValue::Set(chrono::Utc::now().into()),
            ..Default::default()
        };
        todo.insert(db).await.unwrap();
    }
}

fn summarize_request() -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/summarize")
        .body(Body::empty())
        .unwrap()
}

async fn response_body(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn summarize_persists_summary_and_marks_it_sent_on_delivery() {
    let db = setup().await.expect("Failed to setup test database");
    let db = Arc::new(db);
    create_test_todos(&db).await;

    let mut summarizer = MockTestSummarizer::new();
    summarizer
        .expect_summarize()
        .times(1)
        .returning(|_| Ok("A tidy summary".to_string()));

    let mut notifier = MockTestNotifier::new();
    notifier
        .expect_send()
        .withf(|summary| summary == "A tidy summary")
        .times(1)
        .returning(|_| true);

    let state = Arc::new(SummarizeState {
        db: db.clone(),
        summarizer: Arc::new(summarizer),
        notifier: Arc::new(notifier),
    });
    let app = create_summarize_router(state);

    let response = app.oneshot(summarize_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_body(response).await;
    let summarize: SummarizeResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(summarize.message(), "Todos summarized and sent to Slack");
    assert_eq!(summarize.summary(), Some("A tidy summary"));

    let summaries = SummaryService::new(&db)
        .get_all_summaries()
        .await
        .expect("Failed to fetch summaries");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].content(), "A tidy summary");
    assert!(summaries[0].sent_to_slack());
}

#[tokio::test]
async fn summarize_keeps_summary_unsent_when_delivery_fails() {
    let db = setup().await.expect("Failed to setup test database");
    let db = Arc::new(db);
    create_test_todos(&db).await;

    let mut summarizer = MockTestSummarizer::new();
    summarizer
        .expect_summarize()
        .times(1)
        .returning(|_| Ok("Undelivered summary".to_string()));

    let mut notifier = MockTestNotifier::new();
    notifier.expect_send().times(1).returning(|_| false);

    let state = Arc::new(SummarizeState {
        db: db.clone(),
        summarizer: Arc::new(summarizer),
        notifier: Arc::new(notifier),
    });
    let app = create_summarize_router(state);

    let response = app.oneshot(summarize_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_body(response).await;
    let summarize: SummarizeResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        summarize.message(),
        "Todos summarized but failed to send to Slack"
    );
    assert_eq!(summarize.summary(), Some("Undelivered summary"));

    let summaries = SummaryService::new(&db)
        .get_all_summaries()
        .await
        .expect("Failed to fetch summaries");
    assert_eq!(summaries.len(), 1);
    assert!(!summaries[0].sent_to_slack());
}

#[tokio::test]
async fn summarize_passes_all_todos_to_the_summarizer() {
    let db = setup().await.expect("Failed to setup test database");
    let db = Arc::new(db);
    create_test_todos(&db).await;

    let mut summarizer = MockTestSummarizer::new();
    summarizer
        .expect_summarize()
        .withf(|todos| {
            todos.len() == 2 && todos[0].title() == "Buy milk" && todos[1].title() == "Walk the dog"
        })
        .times(1)
        .returning(|_| Ok("Both covered".to_string()));

    let mut notifier = MockTestNotifier::new();
    notifier.expect_send().times(1).returning(|_| true);

    let state = Arc::new(SummarizeState {
        db,
        summarizer: Arc::new(summarizer),
        notifier: Arc::new(notifier),
    });
    let app = create_summarize_router(state);

    let response = app.oneshot(summarize_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn summarize_with_no_todos_short_circuits() {
    let db = setup().await.expect("Failed to setup test database");
    let db = Arc::new(db);

    let mut summarizer = MockTestSummarizer::new();
    summarizer.expect_summarize().times(0);

    let mut notifier = MockTestNotifier::new();
    notifier.expect_send().times(0);

    let state = Arc::new(SummarizeState {
        db: db.clone(),
        summarizer: Arc::new(summarizer),
        notifier: Arc::new(notifier),
    });
    let app = create_summarize_router(state);

    let response = app.oneshot(summarize_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_body(response).await;
    let summarize: SummarizeResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(summarize.message(), "No todos to summarize");
    assert_eq!(summarize.summary(), None);

    let summaries = SummaryService::new(&db)
        .get_all_summaries()
        .await
        .expect("Failed to fetch summaries");
    assert!(summaries.is_empty());
}

#[tokio::test]
async fn summarize_converts_summarizer_failure_to_generic_error() {
    let db = setup().await.expect("Failed to setup test database");
    let db = Arc::new(db);
    create_test_todos(&db).await;

    let mut summarizer = MockTestSummarizer::new();
    summarizer
        .expect_summarize()
        .times(1)
        .returning(|_| Err(SummarizerError::Api("provider exploded".to_string())));

    let mut notifier = MockTestNotifier::new();
    notifier.expect_send().times(0);

    let state = Arc::new(SummarizeState {
        db: db.clone(),
        summarizer: Arc::new(summarizer),
        notifier: Arc::new(notifier),
    });
    let app = create_summarize_router(state);

    let response = app.oneshot(summarize_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_body(response).await;
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error(), "Failed to summarize todos");

    // The failure happened before persistence, so nothing was stored.
    let summaries = SummaryService::new(&db)
        .get_all_summaries()
        .await
        .expect("Failed to fetch summaries");
    assert!(summaries.is_empty());
}

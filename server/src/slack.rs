//! Webhook delivery of generated summaries to a Slack channel.

use async_trait::async_trait;
use serde_json::json;

/// Delivers a summary text to a messaging destination.
///
/// Delivery failure must never abort the summarization workflow, so this
/// trait reports a plain success flag instead of an error.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, summary: &str) -> bool;
}

/// Notifier that posts to a configured Slack incoming webhook.
pub struct SlackNotifier {
    http: reqwest::Client,
    webhook_url: Option<String>,
}

impl SlackNotifier {
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            webhook_url,
        }
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    #[tracing::instrument(skip(self, summary))]
    async fn send(&self, summary: &str) -> bool {
        let Some(webhook_url) = &self.webhook_url else {
            tracing::warn!("SLACK_WEBHOOK_URL is not set, skipping delivery");
            return false;
        };

        let payload = json!({
            "text": format!("*Todo Summary*\n{}", summary),
        });

        match self.http.post(webhook_url).json(&payload).send().await {
            Ok(response) => {
                if response.status().is_success() {
                    true
                } else {
                    tracing::error!("Slack webhook returned status {}", response.status());
                    false
                }
            }
            Err(e) => {
                tracing::error!("Failed to send to Slack: {}", e);
                false
            }
        }
    }
}

//! Delivery of validated contact submissions to the lead webhook.

use reqwest::StatusCode;
use tracing::{debug, info};

use super::form::ContactSubmission;

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("Failed to send request to contact webhook: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Contact webhook returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Posts submissions as JSON. One attempt per submission, no retries.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    url: String,
    http: reqwest::Client,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one submission. Any 2xx response counts as delivered.
    pub async fn send(&self, submission: &ContactSubmission) -> Result<(), WebhookError> {
        debug!(servicio = submission.servicio.value(), "Posting contact submission");

        let response = self
            .http
            .post(&self.url)
            .json(&submission.payload())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WebhookError::Status { status, body });
        }

        info!(servicio = submission.servicio.value(), "Contact submission delivered");
        Ok(())
    }
}

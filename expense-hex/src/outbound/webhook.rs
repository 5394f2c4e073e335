//! reqwest-backed extraction webhook.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, instrument};

use expense_types::{Extraction, ExtractionWebhook, WebhookError, WebhookResult};

/// Hosted automation workflow that performs the extraction.
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://shubamsarawagi2.app.n8n.cloud/webhook/c5e46359-f84e-4f92-a9c4-ecc1b89fdba1";

/// Where and how long to wait for the extraction webhook.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    pub url: String,
    pub timeout: Duration,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_WEBHOOK_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Calls the webhook over HTTP with a single POST per prompt. No retries.
pub struct HttpWebhook {
    client: reqwest::Client,
    url: String,
}

impl HttpWebhook {
    /// Builds the adapter and its pooled HTTP client.
    pub fn new(config: WebhookConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            url: config.url,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn transport_error(&self, err: reqwest::Error) -> WebhookError {
        if err.is_timeout() {
            WebhookError::Timeout {
                url: self.url.clone(),
            }
        } else {
            WebhookError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl ExtractionWebhook for HttpWebhook {
    #[instrument(skip_all, fields(url = %self.url))]
    async fn extract(&self, prompt: &str) -> WebhookResult {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "prompt": prompt }))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebhookError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;
        debug!(bytes = body.len(), "webhook answered");

        let value: serde_json::Value = serde_json::from_slice(&body)?;
        Extraction::from_value(value)
    }
}

//! Extraction webhook port.
//!
//! The webhook is the opaque external service that turns a prompt into
//! structured lenders and borrowers. Implementations can be HTTP clients,
//! canned stubs, etc.

use crate::domain::WebhookResult;

/// Port trait for the extraction webhook.
#[async_trait::async_trait]
pub trait ExtractionWebhook: Send + Sync + 'static {
    /// Sends a prompt and returns the decoded answer.
    ///
    /// Every failure (transport, timeout, status, body) is returned as
    /// `Err`; implementations must not panic.
    async fn extract(&self, prompt: &str) -> WebhookResult;
}

//! Outbound adapters.

mod webhook;

pub use webhook::{DEFAULT_WEBHOOK_URL, HttpWebhook, WebhookConfig};

//! Relay Application Service
//!
//! Turns a free-text message into a formatted summary and expense record
//! through the extraction webhook port.
//! Contains NO infrastructure logic - pure orchestration.

use expense_types::{
    ExpenseDetails, ExtractionWebhook, TransactionRequest, TransactionResponse, WebhookResult,
    build_prompt, format_transaction,
};

/// Application service for transaction processing.
///
/// Generic over `W: ExtractionWebhook` - the adapter is injected at compile time,
/// so tests run against canned webhooks without touching the network.
pub struct RelayService<W: ExtractionWebhook> {
    webhook: W,
}

impl<W: ExtractionWebhook> RelayService<W> {
    /// Creates a new relay service with the given webhook.
    pub fn new(webhook: W) -> Self {
        Self { webhook }
    }

    /// Returns a reference to the underlying webhook.
    pub fn webhook(&self) -> &W {
        &self.webhook
    }

    /// Processes one transaction message.
    ///
    /// Infallible: webhook failures end up as error text in `output`.
    #[tracing::instrument(skip_all)]
    pub async fn process(&self, req: TransactionRequest) -> TransactionResponse {
        let prompt = build_prompt(&req.transaction_message);
        let result = self.webhook.extract(&prompt).await;

        if let Err(err) = &result {
            tracing::warn!(error = %err, "extraction webhook failed");
        }

        summarize(&result)
    }
}

/// Builds the response for a webhook result.
pub fn summarize(result: &WebhookResult) -> TransactionResponse {
    let output = format_transaction(result);

    let (is_expense, expense_details) = match result {
        Ok(extraction) => {
            let is_expense = extraction.has_participants();
            let details = (is_expense && extraction.error.is_none())
                .then(|| ExpenseDetails::from_extraction(extraction));
            (is_expense, details)
        }
        Err(_) => (false, None),
    };

    tracing::debug!(is_expense, "transaction summarized");

    TransactionResponse {
        output,
        is_expense,
        expense_details,
    }
}

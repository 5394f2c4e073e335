//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ExpenseDetails;

/// Free-text transaction to extract.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransactionRequest {
    #[schema(example = "lunch 100 split with Bob")]
    pub transaction_message: String,
}

/// Result of processing a transaction message.
///
/// Webhook failures still produce this response; the failure text is
/// carried in `output`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransactionResponse {
    /// HTML summary of the extraction
    #[schema(example = "<b>Lender 1:</b><br>Name: Alice<br>Amount Lent: 100.00<br><br><b>Transaction Label:</b> lunch")]
    pub output: String,
    #[serde(default)]
    pub is_expense: bool,
    #[serde(default)]
    pub expense_details: Option<ExpenseDetails>,
}

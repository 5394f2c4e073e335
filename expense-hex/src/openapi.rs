//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use expense_types::{ExpenseDetails, SplitType, TransactionRequest, TransactionResponse};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Extract lenders, borrowers and an expense record from a message
#[utoipa::path(
    post,
    path = "/process",
    tag = "transactions",
    request_body = TransactionRequest,
    responses(
        (status = 200, description = "Summary of the extraction, or the webhook error in `output`", body = TransactionResponse),
        (status = 400, description = "Body is not valid JSON"),
        (status = 415, description = "Missing `Content-Type: application/json`"),
        (status = 422, description = "Body does not match TransactionRequest")
    )
)]
async fn process() {}

/// OpenAPI documentation for the expense relay API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Expense Relay API",
        version = "1.0.0",
        description = "Relays free-text transaction messages to an extraction webhook and returns an HTML summary plus a structured expense.",
        license(name = "MIT"),
    ),
    paths(health, process),
    components(schemas(TransactionRequest, TransactionResponse, ExpenseDetails, SplitType)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "transactions", description = "Transaction extraction"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_routes() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(doc["paths"]["/process"]["post"].is_object());
        assert!(doc["paths"]["/health"]["get"].is_object());
        assert!(doc["components"]["schemas"]["ExpenseDetails"].is_object());
    }
}

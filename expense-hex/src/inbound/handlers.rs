//! HTTP request handlers.

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use utoipa::OpenApi;

use expense_types::{ExtractionWebhook, TransactionRequest, TransactionResponse};

use crate::RelayService;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState<W: ExtractionWebhook> {
    pub service: RelayService<W>,
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Extract a transaction from a free-text message.
///
/// Always answers 200 once the body parses; webhook failures are reported
/// inside `output`.
#[tracing::instrument(skip(state, req), fields(message_len = req.transaction_message.len()))]
pub async fn process<W: ExtractionWebhook>(
    State(state): State<Arc<AppState<W>>>,
    Json(req): Json<TransactionRequest>,
) -> Json<TransactionResponse> {
    let response = state.service.process(req).await;
    tracing::info!(is_expense = response.is_expense, "transaction processed");
    Json(response)
}

/// Serves the generated OpenAPI document.
pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

//! # Expense Hex
//!
//! Application service layer and HTTP adapters for the expense relay.
//!
//! ## Architecture
//!
//! - `service/` - Application service (prompt, webhook call, formatting)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `outbound/` - Extraction webhook adapter (reqwest)
//!
//! The service is generic over `W: ExtractionWebhook`, allowing
//! different webhook implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod outbound;
pub mod service;


pub use outbound::{HttpWebhook, WebhookConfig};
pub use service::RelayService;

//! # Expense Types
//!
//! Domain types and port traits for the expense relay service.
//! This crate has ZERO external IO dependencies - only data structures,
//! formatting rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Webhook extraction model, prompt, HTML summary, expense details
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Webhook error type

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Borrower, CustomSplits, ExpenseDetails, Extraction, Lender, SplitType, WebhookResult,
    build_prompt, format_transaction,
};
pub use dto::*;
pub use error::WebhookError;
pub use ports::ExtractionWebhook;

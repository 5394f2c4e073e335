//! Domain models for the expense relay.

pub mod expense;
pub mod extraction;
pub mod prompt;
pub mod summary;

pub use expense::{CustomSplits, ExpenseDetails, SplitType};
pub use extraction::{Borrower, Extraction, Lender, WebhookResult};
pub use prompt::build_prompt;
pub use summary::format_transaction;

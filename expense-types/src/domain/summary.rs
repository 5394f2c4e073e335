//! HTML summary of an extracted transaction.

use super::extraction::WebhookResult;

/// Renders a webhook result as the HTML snippet shown to the user.
///
/// Error-shaped results short-circuit into a single bold error line. The
/// label line closes the snippet without a trailing `<br>`.
pub fn format_transaction(result: &WebhookResult) -> String {
    let extraction = match result {
        Ok(extraction) => extraction,
        Err(err) => return format!("<b>Error:</b> {err}"),
    };
    if let Some(message) = extraction.error_message() {
        return format!("<b>Error:</b> {message}");
    }

    let mut lines = Vec::new();

    for (i, lender) in extraction.lenders.iter().enumerate() {
        lines.push(format!("<b>Lender {}:</b><br>", i + 1));
        lines.push(format!(
            "Name: {}<br>",
            lender.name.as_deref().unwrap_or("Unknown")
        ));
        lines.push(format!(
            "Amount Lent: {:.2}<br><br>",
            lender.amount_lent.unwrap_or(0.0)
        ));
    }

    for (i, borrower) in extraction.borrowers.iter().enumerate() {
        lines.push(format!("<b>Borrower {}:</b><br>", i + 1));
        lines.push(format!(
            "Name: {}<br>",
            borrower.name.as_deref().unwrap_or("Unknown")
        ));
        lines.push(format!(
            "Amount Borrowed: {:.2}<br><br>",
            borrower.amount_borrowed.unwrap_or(0.0)
        ));
    }

    lines.push(format!(
        "<b>Transaction Label:</b> {}",
        extraction.label.as_deref().unwrap_or("N/A")
    ));

    lines.concat().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Extraction;
    use crate::error::WebhookError;
    use serde_json::json;

    fn render(body: serde_json::Value) -> String {
        format_transaction(&Extraction::from_value(body))
    }

    #[test]
    fn test_error_body() {
        assert_eq!(render(json!({ "error": "X" })), "<b>Error:</b> X");
    }

    #[test]
    fn test_error_body_ignores_data() {
        let out = render(json!({
            "error": "partial",
            "Lenders": [{ "name": "A", "amountLent": 1 }]
        }));
        assert_eq!(out, "<b>Error:</b> partial");
    }

    #[test]
    fn test_failed_call() {
        let result = Err(WebhookError::Transport("connection refused".into()));
        assert_eq!(format_transaction(&result), "<b>Error:</b> connection refused");
    }

    #[test]
    fn test_empty_body_is_label_only() {
        assert_eq!(render(json!({})), "<b>Transaction Label:</b> N/A");
    }

    #[test]
    fn test_empty_arrays_are_label_only() {
        let out = render(json!({ "label": "misc", "Lenders": [], "Borrowers": [] }));
        assert_eq!(out, "<b>Transaction Label:</b> misc");
    }

    #[test]
    fn test_single_lender() {
        let out = render(json!({ "Lenders": [{ "name": "A", "amountLent": 10 }] }));
        assert!(out.contains("Lender 1:"));
        assert!(out.contains("Name: A"));
        assert!(out.contains("Amount Lent: 10.00"));
        assert!(!out.contains("Borrower"));
    }

    #[test]
    fn test_full_layout() {
        let out = render(json!({
            "label": "dinner",
            "Lenders": [{ "name": "Alice", "amountLent": 90.5 }],
            "Borrowers": [
                { "name": "Bob", "amountBorrowed": 30 },
                { "amountBorrowed": 30.25 }
            ]
        }));

        assert_eq!(
            out,
            "<b>Lender 1:</b><br>Name: Alice<br>Amount Lent: 90.50<br><br>\
             <b>Borrower 1:</b><br>Name: Bob<br>Amount Borrowed: 30.00<br><br>\
             <b>Borrower 2:</b><br>Name: Unknown<br>Amount Borrowed: 30.25<br><br>\
             <b>Transaction Label:</b> dinner"
        );
    }

    #[test]
    fn test_label_line_has_no_trailing_break() {
        let out = render(json!({
            "label": "taxi",
            "Lenders": [{ "name": "A", "amountLent": 40 }]
        }));
        assert!(out.ends_with("<br><br><b>Transaction Label:</b> taxi"));
        assert!(!out.ends_with("<br>"));
    }

    #[test]
    fn test_numeric_label_and_name_rendered() {
        let out = render(json!({
            "label": 2024,
            "Lenders": [{ "name": 7, "amountLent": 100 }]
        }));
        assert!(out.contains("Name: 7<br>"));
        assert!(out.ends_with("<b>Transaction Label:</b> 2024"));
    }

    #[test]
    fn test_missing_amount_is_zero() {
        let out = render(json!({ "Lenders": [{ "name": "A" }] }));
        assert!(out.contains("Amount Lent: 0.00"));
    }
}

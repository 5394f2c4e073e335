//! Extraction prompt sent to the webhook.

/// Builds the instruction asking the webhook to extract lenders and borrowers.
///
/// The message is embedded verbatim, without escaping.
pub fn build_prompt(transaction_message: &str) -> String {
    format!(
        r#"
    Extract transaction details from: "{transaction_message}"

    Return ONLY JSON:
    {{
      "label": "string",
      "Lenders": [{{ "name": "string", "amountLent": number }}],
      "Borrowers": [{{ "name": "string", "amountBorrowed": number }}]
    }}
    "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_embedded_verbatim() {
        let prompt = build_prompt(r#"paid "100" for <pizza>"#);
        assert!(prompt.contains(r#"Extract transaction details from: "paid "100" for <pizza>""#));
    }

    #[test]
    fn test_requests_expected_shape() {
        let prompt = build_prompt("lunch");
        assert!(prompt.contains(r#""label": "string""#));
        assert!(prompt.contains(r#""Lenders": [{ "name": "string", "amountLent": number }]"#));
        assert!(
            prompt.contains(r#""Borrowers": [{ "name": "string", "amountBorrowed": number }]"#)
        );
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(build_prompt("taxi 40"), build_prompt("taxi 40"));
    }
}

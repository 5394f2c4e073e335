//! Error types for the expense relay.

/// Failure of a call to the extraction webhook.
///
/// Never crosses the relay boundary as an error: the service folds it into
/// the HTML summary of an otherwise successful response. The `Display`
/// output is the text shown after `Error:`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WebhookError {
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("{0}")]
    Transport(String),

    #[error("{status} error for url: {url}")]
    Status { status: u16, url: String },

    #[error("Invalid webhook response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for WebhookError {
    fn from(err: serde_json::Error) -> Self {
        WebhookError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = WebhookError::Status {
            status: 500,
            url: "http://hook.local/x".into(),
        };
        assert_eq!(err.to_string(), "500 error for url: http://hook.local/x");
    }

    #[test]
    fn test_json_error_becomes_decode() {
        let err: WebhookError = serde_json::from_str::<serde_json::Value>("{nope")
            .unwrap_err()
            .into();
        assert!(matches!(err, WebhookError::Decode(_)));
    }
}

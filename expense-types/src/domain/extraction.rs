//! What the extraction webhook sends back.
//!
//! The far side enforces no schema, so every field is optional and
//! `null` is treated the same as a missing key. Names and labels of any
//! other JSON type are kept as their compact JSON text. The only thing
//! that is rejected outright is a body that is not a JSON object at all.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::WebhookError;

/// Outcome of one webhook call.
pub type WebhookResult = Result<Extraction, WebhookError>;

/// A participant who paid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lender {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(rename = "amountLent", default)]
    pub amount_lent: Option<f64>,
}

/// A participant who owes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Borrower {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(rename = "amountBorrowed", default)]
    pub amount_borrowed: Option<f64>,
}

/// Structured transaction extracted from a free-text message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    #[serde(default, deserialize_with = "lenient_text")]
    pub label: Option<String>,
    #[serde(rename = "Lenders", default, deserialize_with = "null_as_default")]
    pub lenders: Vec<Lender>,
    #[serde(rename = "Borrowers", default, deserialize_with = "null_as_default")]
    pub borrowers: Vec<Borrower>,
    /// Set whenever the body carried an `error` key, even with a `null` value.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<Value>,
}

impl Extraction {
    /// Decodes a raw webhook body.
    pub fn from_value(value: Value) -> Result<Self, WebhookError> {
        if !value.is_object() {
            return Err(WebhookError::Decode(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Returns the error text when the webhook answered with an error-shaped body.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|err| match err {
            Value::String(msg) => msg.clone(),
            other => other.to_string(),
        })
    }

    /// True when at least one lender or borrower was extracted.
    pub fn has_participants(&self) -> bool {
        !self.lenders.is_empty() || !self.borrowers.is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

//! Wire envelope of the sports statistics API.

use serde::Deserialize;
use serde_json::Value;

/// Envelope wrapped around every list response.
///
/// `errors` is an empty array on success, and either a non-empty array or an
/// object keyed by error name on failure.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub errors: Value,
    #[serde(default)]
    pub response: Option<Vec<Value>>,
}

impl Envelope {
    /// Flatten `errors` into one message, or `None` when there are none.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        let parts: Vec<String> = match &self.errors {
            Value::Array(items) => items.iter().map(render).collect(),
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| format!("{key}: {}", render(value)))
                .collect(),
            Value::Null => Vec::new(),
            other => vec![render(other)],
        };
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

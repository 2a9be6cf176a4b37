//! Output formatting utilities for the CLI.

use serde::Serialize;
use serde_json::Value;

/// A command result that can be printed for humans or as JSON
pub trait CommandOutput: Serialize {
    /// Render as human-readable text
    fn to_human(&self) -> String;
    /// Render as a JSON value
    fn to_json(&self) -> serde_json::Value;
}

/// Print `result` to stdout in the selected mode
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// An HTTP response as shown to the user
#[derive(Debug, Serialize)]
pub struct ResponseOutput {
    /// HTTP status code
    pub status: u16,
    /// Whether the status is 2xx
    pub success: bool,
    /// Parsed JSON when the body is JSON, otherwise the raw text
    pub body: Value,
}

impl ResponseOutput {
    /// Build from a status code and the raw response body
    pub fn new(status: reqwest::StatusCode, body: &str) -> Self {
        let body = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
        };

        Self {
            status: status.as_u16(),
            success: status.is_success(),
            body,
        }
    }
}

impl CommandOutput for ResponseOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!("HTTP {}", self.status)];
        match &self.body {
            Value::Null => {}
            Value::String(text) => lines.push(text.clone()),
            other => lines.push(serde_json::to_string_pretty(other).unwrap_or_default()),
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

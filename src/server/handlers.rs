//! Tool-result payload helpers
//!
//! Tool results travel as text content with an optional `isError`
//! flag. Callers branch on that flag, not on protocol-level errors.

use serde_json::Value;

/// Build a text content response
pub fn text_response(text: String) -> Value {
    serde_json::json!({
        "content": [{
            "type": "text",
            "text": text
        }]
    })
}

/// Build an error content response with `isError` set
pub fn error_response(message: String) -> Value {
    serde_json::json!({
        "content": [{
            "type": "text",
            "text": format!("Error: {}", message)
        }],
        "isError": true
    })
}

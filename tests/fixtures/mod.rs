use serde_json::{Value, json};

pub fn gemini_text_response(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": text }]
            },
            "finishReason": "STOP"
        }]
    })
}

pub fn gemini_error_response(message: &str, status: &str) -> Value {
    json!({
        "error": {
            "code": 400,
            "message": message,
            "status": status
        }
    })
}

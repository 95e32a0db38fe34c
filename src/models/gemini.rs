//! Wire types for the Gemini `generateContent` REST API.

use serde::{self, Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub enum Part {
    #[serde(rename = "text")]
    Text(String),
    #[serde(rename = "inlineData")]
    InlineData(Blob),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Clone)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(rename = "finishReason", default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// First text part of the first candidate, if the model returned one.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|part| match part {
                Part::Text(text) => Some(text.as_str()),
                _ => None,
            })
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<i32>,
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

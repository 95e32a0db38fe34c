use crate::errors::{EraBlenderError, classify_api_error};
use crate::models::gemini::{
    ApiErrorResponse, Blob, Content, GenerateContentRequest, GenerateContentResponse, Part,
};

pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    /// One best-effort `generateContent` call: the style prompt plus an
    /// optional inline image part. Returns the first text part of the first
    /// candidate. No retries.
    pub async fn generate_content(
        &self,
        prompt: &str,
        image: Option<Blob>,
    ) -> Result<String, EraBlenderError> {
        let mut parts = vec![Part::Text(prompt.to_string())];
        if let Some(blob) = image {
            parts.push(Part::InlineData(blob));
        }

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            log::debug!("Gemini API error: status {}, body {}", status, text);

            // Prefer the structured error message when the body parses.
            let message = match serde_json::from_str::<ApiErrorResponse>(&text) {
                Ok(body) => body.error.message,
                Err(_) => text,
            };
            return Err(classify_api_error(&message));
        }

        let completion: GenerateContentResponse = response.json().await?;
        completion
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| {
                EraBlenderError::GenerationFailed("empty response from model".to_string())
            })
    }
}

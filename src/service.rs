use crate::config::Config;
use crate::errors::EraBlenderError;
use crate::gemini_client::GeminiClient;
use crate::models::gemini::Blob;

/// Drives the single external generative-text call per request. Holds the
/// shared HTTP client; everything else arrives with the request.
pub struct GenerationService {
    http_client: reqwest::Client,
}

impl GenerationService {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    pub async fn describe(
        &self,
        config: &Config,
        prompt: &str,
        image: Option<Blob>,
    ) -> Result<String, EraBlenderError> {
        let api_key = config
            .gemini_api_key
            .as_deref()
            .ok_or(EraBlenderError::MissingCredential)?;

        let client = GeminiClient::new(
            self.http_client.clone(),
            &config.gemini_api_url,
            api_key,
            &config.gemini_model,
        );
        client.generate_content(prompt, image).await
    }
}

use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use era_blender::config::{Config, Environment};

pub const GENERATE_CONTENT_PATH: &str = "/models/test-model:generateContent";

pub fn create_test_config(api_url: String) -> Config {
    Config {
        gemini_api_key: Some("test-key".to_string()),
        gemini_api_url: api_url,
        gemini_model: "test-model".to_string(),
        port: 0,
        environment: Environment::Development,
    }
}

pub fn create_config_without_key() -> Config {
    Config {
        gemini_api_key: None,
        ..create_test_config("http://localhost:9".to_string())
    }
}

pub async fn setup_gemini_mock(status: u16, body: impl Into<Value>) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_CONTENT_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(body.into()))
        .mount(&mock_server)
        .await;

    mock_server
}

pub fn multipart_payload(boundary: &str, era: Option<&str>, image: Option<&[u8]>) -> Vec<u8> {
    let mut body = Vec::new();
    if let Some(era) = era {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"era\"\r\n\r\n{era}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some(image) = image {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"image\"; \
                 filename=\"photo.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(image);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}

use std::fmt;

use actix_web::http::StatusCode;

use crate::eras;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EraBlenderError {
    MissingField(String),
    UnsupportedEra(String),
    InvalidImageEncoding,
    MissingCredential,
    InvalidCredential(String),
    QuotaExceeded(String),
    RateLimited(String),
    GenerationFailed(String),
}

impl fmt::Display for EraBlenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EraBlenderError::MissingField(fields) => {
                write!(f, "Missing required fields: {}", fields)
            }
            EraBlenderError::UnsupportedEra(era) => write!(
                f,
                "Unsupported era: {}. Supported eras: {}",
                era,
                eras::supported_years_list()
            ),
            EraBlenderError::InvalidImageEncoding => {
                write!(f, "Invalid image format. Please provide a valid base64 image.")
            }
            EraBlenderError::MissingCredential => write!(f, "Gemini API key not configured"),
            EraBlenderError::InvalidCredential(_) => {
                write!(f, "Invalid or missing Gemini API key")
            }
            EraBlenderError::QuotaExceeded(_) => {
                write!(f, "API quota exceeded. Please try again later.")
            }
            EraBlenderError::RateLimited(_) => {
                write!(f, "Rate limit exceeded. Please try again in a moment.")
            }
            EraBlenderError::GenerationFailed(_) => {
                write!(f, "Failed to generate image transformation")
            }
        }
    }
}

impl std::error::Error for EraBlenderError {}

impl EraBlenderError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EraBlenderError::MissingField(_)
            | EraBlenderError::UnsupportedEra(_)
            | EraBlenderError::InvalidImageEncoding => StatusCode::BAD_REQUEST,
            EraBlenderError::MissingCredential
            | EraBlenderError::InvalidCredential(_)
            | EraBlenderError::QuotaExceeded(_)
            | EraBlenderError::RateLimited(_)
            | EraBlenderError::GenerationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Raw underlying message from the external service, attached to
    /// responses only outside production.
    pub fn details(&self) -> Option<&str> {
        match self {
            EraBlenderError::InvalidCredential(raw)
            | EraBlenderError::QuotaExceeded(raw)
            | EraBlenderError::RateLimited(raw)
            | EraBlenderError::GenerationFailed(raw) => Some(raw),
            _ => None,
        }
    }
}

/// Classifies an external-service failure by inspecting its message. The
/// Gemini SDK surface exposes no stable error codes over plain REST, so the
/// substring checks mirror the strings Google actually returns.
pub fn classify_api_error(message: &str) -> EraBlenderError {
    if message.contains("API key") {
        EraBlenderError::InvalidCredential(message.to_string())
    } else if message.contains("quota") {
        EraBlenderError::QuotaExceeded(message.to_string())
    } else if message.contains("rate limit") {
        EraBlenderError::RateLimited(message.to_string())
    } else {
        EraBlenderError::GenerationFailed(message.to_string())
    }
}

impl From<reqwest::Error> for EraBlenderError {
    fn from(err: reqwest::Error) -> Self {
        EraBlenderError::GenerationFailed(err.to_string())
    }
}

impl From<serde_json::Error> for EraBlenderError {
    fn from(err: serde_json::Error) -> Self {
        EraBlenderError::GenerationFailed(err.to_string())
    }
}

impl From<base64::DecodeError> for EraBlenderError {
    fn from(_: base64::DecodeError) -> Self {
        EraBlenderError::InvalidImageEncoding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn test_error_display_missing_field() {
        let error = EraBlenderError::MissingField("imageUrl (or text) and era".to_string());
        assert_eq!(
            error.to_string(),
            "Missing required fields: imageUrl (or text) and era"
        );
    }

    #[test]
    fn test_error_display_unsupported_era_lists_valid_years() {
        let error = EraBlenderError::UnsupportedEra("1975".to_string());
        assert_eq!(
            error.to_string(),
            "Unsupported era: 1975. Supported eras: 1900, 1950, 2000, 2050"
        );
    }

    #[test]
    fn test_error_display_invalid_image_encoding() {
        let error = EraBlenderError::InvalidImageEncoding;
        assert_eq!(
            error.to_string(),
            "Invalid image format. Please provide a valid base64 image."
        );
    }

    #[test]
    fn test_error_display_missing_credential() {
        let error = EraBlenderError::MissingCredential;
        assert_eq!(error.to_string(), "Gemini API key not configured");
    }

    #[test]
    fn test_error_display_hides_raw_external_message() {
        let error = EraBlenderError::QuotaExceeded("quota blown at 04:12 UTC".to_string());
        assert_eq!(error.to_string(), "API quota exceeded. Please try again later.");
    }

    #[test]
    fn test_classify_api_key_error() {
        let error = classify_api_error("API key not valid. Please pass a valid API key.");
        assert!(matches!(error, EraBlenderError::InvalidCredential(_)));
    }

    #[test]
    fn test_classify_quota_error() {
        let error = classify_api_error("You exceeded your current quota, please check your plan");
        assert!(matches!(error, EraBlenderError::QuotaExceeded(_)));
    }

    #[test]
    fn test_classify_rate_limit_error() {
        let error = classify_api_error("rate limit exceeded for gemini-1.5-flash");
        assert!(matches!(error, EraBlenderError::RateLimited(_)));
    }

    #[test]
    fn test_classify_unknown_error_falls_back_to_generic() {
        let error = classify_api_error("Internal server error");
        assert!(matches!(error, EraBlenderError::GenerationFailed(_)));
        assert_eq!(error.to_string(), "Failed to generate image transformation");
    }

    #[test]
    fn test_validation_errors_map_to_400() {
        assert_eq!(
            EraBlenderError::MissingField("era".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            EraBlenderError::UnsupportedEra("1975".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            EraBlenderError::InvalidImageEncoding.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_external_errors_map_to_500() {
        assert_eq!(
            EraBlenderError::MissingCredential.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            EraBlenderError::RateLimited("rate limit".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_details_only_for_external_failures() {
        let external = EraBlenderError::GenerationFailed("socket closed".to_string());
        assert_eq!(external.details(), Some("socket closed"));

        assert!(EraBlenderError::MissingCredential.details().is_none());
        assert!(EraBlenderError::InvalidImageEncoding.details().is_none());
    }

    #[test]
    fn test_error_source() {
        let error = EraBlenderError::GenerationFailed("boom".to_string());
        assert!(error.source().is_none());
    }
}

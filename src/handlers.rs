use actix_multipart::form::MultipartForm;
use actix_multipart::form::bytes::Bytes;
use actix_multipart::form::text::Text;
use actix_web::HttpResponse;
use actix_web::web::{self, Data};

use crate::config::{Config, Environment};
use crate::errors::EraBlenderError;
use crate::models::gemini::Blob;
use crate::models::request::GenerateRequest;
use crate::models::response::{
    ErrorResponse, GenerateResponse, HealthResponse, NotFoundResponse,
};
use crate::service::GenerationService;
use crate::{consts, eras, images};

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Era Blender API is running".to_string(),
    })
}

fn error_response(error: &EraBlenderError, config: &Config) -> HttpResponse {
    let details = match config.environment {
        Environment::Development => error.details().map(str::to_string),
        Environment::Production => None,
    };
    HttpResponse::build(error.status_code()).json(ErrorResponse {
        error: error.to_string(),
        details,
    })
}

fn missing_fields() -> EraBlenderError {
    EraBlenderError::MissingField("imageUrl (or text) and era".to_string())
}

pub async fn generate(
    service: Data<GenerationService>,
    config: Data<Config>,
    request: web::Json<GenerateRequest>,
) -> HttpResponse {
    let request = request.into_inner();

    let Some(era_year) = request.era else {
        return error_response(&missing_fields(), &config);
    };
    if request.image_url.is_none() && request.text.is_none() {
        return error_response(&missing_fields(), &config);
    }

    let style = match eras::resolve(era_year) {
        Ok(style) => style,
        Err(error) => {
            log::info!("error: unsupported era: {}", era_year);
            return error_response(&error, &config);
        }
    };

    if config.gemini_api_key.is_none() {
        return error_response(&EraBlenderError::MissingCredential, &config);
    }

    log::info!("Processing transformation for era {}", era_year);

    let (prompt, image_part) = if let Some(text) = request.text.as_deref() {
        (eras::build_prompt(style, Some(text)), None)
    } else {
        let payload = request.image_url.as_deref().unwrap_or_default();
        let bytes = match images::decode_image_payload(payload) {
            Ok(bytes) => bytes,
            Err(error) => return error_response(&error, &config),
        };
        let blob = Blob {
            mime_type: consts::FALLBACK_IMAGE_MIME.to_string(),
            data: images::encode_base64(&bytes),
        };
        (eras::build_prompt(style, None), Some(blob))
    };

    match service.describe(&config, &prompt, image_part).await {
        Ok(description) => HttpResponse::Ok().json(GenerateResponse {
            image_url: request.image_url,
            text: request.text,
            description,
            era: era_year,
            prompt,
            message: consts::ADVISORY_MESSAGE.to_string(),
        }),
        Err(error) => {
            log::error!("generate error: {:?}", error);
            error_response(&error, &config)
        }
    }
}

#[derive(MultipartForm)]
pub struct UploadForm {
    pub image: Option<Bytes>,
    pub era: Option<Text<String>>,
}

pub async fn upload(
    service: Data<GenerationService>,
    config: Data<Config>,
    MultipartForm(form): MultipartForm<UploadForm>,
) -> HttpResponse {
    let Some(image) = form.image else {
        return error_response(
            &EraBlenderError::MissingField("image file".to_string()),
            &config,
        );
    };
    let Some(era_field) = form.era else {
        return error_response(&EraBlenderError::MissingField("era".to_string()), &config);
    };

    let era_raw = era_field.0;
    let style = match era_raw.trim().parse::<u16>() {
        Ok(year) => match eras::resolve(year) {
            Ok(style) => style,
            Err(error) => {
                log::info!("error: unsupported era: {}", era_raw);
                return error_response(&error, &config);
            }
        },
        Err(_) => {
            log::info!("error: unsupported era: {}", era_raw);
            return error_response(&EraBlenderError::UnsupportedEra(era_raw), &config);
        }
    };

    if config.gemini_api_key.is_none() {
        return error_response(&EraBlenderError::MissingCredential, &config);
    }

    log::info!(
        "Processing uploaded file ({} bytes) for era {}",
        image.data.len(),
        style.year
    );

    let mime_type = image
        .content_type
        .as_ref()
        .map(|mime| mime.to_string())
        .unwrap_or_else(|| consts::FALLBACK_IMAGE_MIME.to_string());
    let encoded = images::encode_base64(&image.data);
    let data_url = images::to_data_url(&mime_type, &encoded);

    let prompt = eras::build_prompt(style, None);
    let blob = Blob {
        mime_type,
        data: encoded,
    };

    match service.describe(&config, &prompt, Some(blob)).await {
        Ok(description) => HttpResponse::Ok().json(GenerateResponse {
            image_url: Some(data_url),
            text: None,
            description,
            era: style.year,
            prompt,
            message: consts::ADVISORY_MESSAGE.to_string(),
        }),
        Err(error) => {
            log::error!("upload error: {:?}", error);
            error_response(&error, &config)
        }
    }
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(NotFoundResponse {
        error: "Endpoint not found".to_string(),
        available_endpoints: vec![
            "GET /health".to_string(),
            "POST /api/generate".to_string(),
            "POST /api/upload".to_string(),
        ],
    })
}

use std::sync::Arc;

use actix_cors::Cors;
use actix_multipart::form::MultipartFormConfig;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::web::{self, Data};
use actix_web::{App, Error};

use crate::service::GenerationService;
use crate::{config, consts, handlers};

pub fn create_app(
    service: Arc<GenerationService>,
    config: Arc<config::Config>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Logger::default())
        .wrap(Cors::permissive())
        .app_data(Data::from(service))
        .app_data(Data::from(config))
        .app_data(web::JsonConfig::default().limit(consts::JSON_PAYLOAD_LIMIT))
        .app_data(
            MultipartFormConfig::default()
                .total_limit(consts::UPLOAD_SIZE_LIMIT)
                .memory_limit(consts::UPLOAD_SIZE_LIMIT),
        )
        .route("/health", web::get().to(handlers::health))
        .service(
            web::scope("/api")
                .route("/generate", web::post().to(handlers::generate))
                .route("/upload", web::post().to(handlers::upload)),
        )
        .default_service(web::route().to(handlers::not_found))
}

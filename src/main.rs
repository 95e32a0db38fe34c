use std::sync::Arc;
use std::time::Duration;

use era_blender::app::create_app;
use era_blender::config;
use era_blender::consts;
use era_blender::service::GenerationService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing Era Blender API...");

    let config = config::load_config();
    if config.gemini_api_key.is_some() {
        log::info!("Gemini API key configured");
    } else {
        log::warn!("GEMINI_API_KEY not found in environment variables");
        log::warn!("Generation endpoints will fail until it is set in .env");
    }

    let http_client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(consts::CONNECT_TIMEOUT_SECS))
        .read_timeout(Duration::from_secs(consts::READ_TIMEOUT_SECS))
        .build()
        .expect("Failed to build HTTP client");

    let service = Arc::new(GenerationService::new(http_client));
    let port = config.port;
    let config = Arc::new(config);

    log::info!("Era Blender API server running on port {}", port);
    log::info!("Health check: http://localhost:{}/health", port);

    actix_web::HttpServer::new(move || create_app(service.clone(), config.clone()))
        .bind(("0.0.0.0", port))?
        .run()
        .await
}

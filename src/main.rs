use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use resume_screen::config::{LoggingSettings, Settings};
use resume_screen::core::{Analyzer, RoleCatalog};
use resume_screen::routes::{self, AppState};
use resume_screen::services::{SlotRegistry, TextExtractor};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize tracing; RUST_LOG takes precedence over the configured level
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_logging(&settings.logging);

    info!("Starting resume screening service...");

    let catalog = match &settings.catalog.path {
        Some(path) => RoleCatalog::load(path),
        None => RoleCatalog::builtin(),
    }
    .map_err(|e| {
        error!("Failed to load role catalog: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;

    info!(
        "Role catalog loaded: {}",
        catalog.role_names().collect::<Vec<_>>().join(", ")
    );

    let slots = SlotRegistry::new(settings.booking.to_slots());
    info!("Slot registry initialized with {} slots", slots.capacity());

    let analyzer = Analyzer::new(Arc::new(catalog), Arc::new(slots), settings.analysis.threshold);
    let extractor = TextExtractor::new(settings.analysis.max_upload_bytes);

    info!(
        "Analyzer initialized (threshold: {}, max upload: {} bytes)",
        analyzer.threshold(),
        extractor.max_upload_bytes()
    );

    let app_state = AppState { analyzer, extractor };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let max_upload_bytes = settings.analysis.max_upload_bytes;

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config(max_upload_bytes))
            .app_data(routes::query_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}

// Route exports
pub mod analysis;
pub mod slots;

use crate::core::{AnalysisError, Analyzer};
use crate::services::TextExtractor;
use actix_web::{error, web, HttpRequest};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
    pub extractor: TextExtractor,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(analysis::configure)
            .configure(slots::configure),
    );
}

/// JSON extractor settings: body limit plus the `{status: "Error"}` payload on rejection
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(handle_json_payload_error)
}

/// Query extractor settings with the `{status: "Error"}` payload on rejection
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(handle_query_payload_error)
}

fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    AnalysisError::InvalidInput(format!("Invalid JSON: {}", err)).into()
}

fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    AnalysisError::InvalidInput(format!("Invalid query: {}", err)).into()
}

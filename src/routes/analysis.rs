use crate::core::AnalysisError;
use crate::models::{
    AnalysisResponse, AnalyzeQuery, AnalyzeTextRequest, ExtractedDocument, HealthResponse, RoleSummary,
};
use crate::routes::AppState;
use crate::services::{DocumentKind, ExtractionError};
use actix_web::{http::header, http::StatusCode, web, HttpRequest, HttpResponse, ResponseError};
use validator::Validate;

impl ResponseError for AnalysisError {
    fn status_code(&self) -> StatusCode {
        match self {
            AnalysisError::RoleNotFound(_) => StatusCode::NOT_FOUND,
            AnalysisError::ExtractionFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AnalysisError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(AnalysisResponse::Error {
            message: self.to_string(),
        })
    }
}

/// Configure analysis and catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/roles", web::get().to(list_roles))
        .route("/roles/{name}", web::get().to(get_role))
        .route("/resumes/analyze", web::post().to(analyze_document))
        .route("/resumes/analyze/text", web::post().to(analyze_text));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        roles: state.analyzer.catalog().len(),
    })
}

/// List every role in the catalog
///
/// GET /api/v1/roles
async fn list_roles(state: web::Data<AppState>) -> HttpResponse {
    let roles: Vec<RoleSummary> = state
        .analyzer
        .catalog()
        .profiles()
        .map(|profile| RoleSummary::from(&**profile))
        .collect();

    HttpResponse::Ok().json(roles)
}

/// Fetch one role profile
///
/// GET /api/v1/roles/{name}
async fn get_role(state: web::Data<AppState>, name: web::Path<String>) -> Result<HttpResponse, AnalysisError> {
    let profile = state.analyzer.catalog().lookup(&name)?;
    Ok(HttpResponse::Ok().json(RoleSummary::from(&*profile)))
}

/// Analyze an uploaded document
///
/// POST /api/v1/resumes/analyze?role={role}&threshold={threshold}
///
/// Body is the raw document, `Content-Type: application/pdf` or `text/plain`.
/// Bodies over `analysis.max_upload_bytes` are rejected as invalid input.
async fn analyze_document(
    state: web::Data<AppState>,
    query: web::Query<AnalyzeQuery>,
    payload: web::Payload,
    http_req: HttpRequest,
) -> Result<HttpResponse, AnalysisError> {
    query
        .validate()
        .map_err(|errors| AnalysisError::InvalidInput(errors.to_string()))?;

    let content_type = http_req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let kind = DocumentKind::from_content_type(content_type)?;

    let limit = state.extractor.max_upload_bytes();
    let body = match payload.to_bytes_limited(limit).await {
        Ok(body) => body.map_err(|e| AnalysisError::InvalidInput(format!("could not read upload: {}", e)))?,
        Err(_) => return Err(ExtractionError::TooLarge { limit }.into()),
    };
    state.extractor.check_size(body.len())?;

    let content_length_known = http_req.headers().contains_key(header::CONTENT_LENGTH);

    // Unknown roles fail before any extraction work
    state.analyzer.catalog().lookup(&query.role)?;

    tracing::info!(
        "Analyzing {:?} upload ({} bytes) for role: {}",
        kind,
        body.len(),
        query.role
    );

    let document = state
        .extractor
        .extract_blocking(kind, body.to_vec(), content_length_known)
        .await?;

    let result = state.analyzer.analyze(&query.role, &document, query.threshold)?;

    Ok(HttpResponse::Ok().json(AnalysisResponse::from(result)))
}

/// Analyze text that was extracted elsewhere
///
/// POST /api/v1/resumes/analyze/text
///
/// Request body:
/// ```json
/// {
///   "role": "business analyst",
///   "text": "SQL, Excel, data analysis ...",
///   "threshold": 0.6
/// }
/// ```
async fn analyze_text(
    state: web::Data<AppState>,
    req: web::Json<AnalyzeTextRequest>,
) -> Result<HttpResponse, AnalysisError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for analyze_text request: {:?}", errors);
        return Err(AnalysisError::InvalidInput(errors.to_string()));
    }

    let req = req.into_inner();
    let document = ExtractedDocument::new(req.text, true);
    let result = state.analyzer.analyze(&req.role, &document, req.threshold)?;

    Ok(HttpResponse::Ok().json(AnalysisResponse::from(result)))
}

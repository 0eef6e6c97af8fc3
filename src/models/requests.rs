use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string of the document upload endpoint
///
/// `POST /api/v1/resumes/analyze?role=business%20analyst&threshold=0.6`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeQuery {
    #[validate(length(min = 1))]
    #[serde(alias = "jobRole", alias = "job_role")]
    pub role: String,
    #[validate(range(min = 0.0, max = 1.0))]
    pub threshold: Option<f64>,
}

/// Request to analyze already-extracted text
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeTextRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "jobRole", alias = "job_role")]
    pub role: String,
    pub text: String,
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default)]
    pub threshold: Option<f64>,
}

/// Request to book an interview slot
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookSlotRequest {
    #[validate(length(min = 1))]
    pub date: String,
    #[validate(length(min = 1))]
    pub time: String,
}

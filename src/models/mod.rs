// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BookingSlot, Decision, ExtractedDocument, MatchRatio, RemediationResource, SkillPhrase};
pub use requests::{AnalyzeQuery, AnalyzeTextRequest, BookSlotRequest};
pub use responses::{AnalysisResponse, HealthResponse, RoleSummary, SlotsResponse};

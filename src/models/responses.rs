use crate::core::{Guidance, MatchResult, Outcome, RoleProfile};
use crate::models::domain::{BookingSlot, SkillPhrase};
use serde::{Deserialize, Serialize};

/// Analysis payload, tagged by `status`
///
/// Match carries open slots, NotMatch carries the missing skills and
/// guidance. "No skills matched" is always an empty `matchedSkills` list.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status")]
pub enum AnalysisResponse {
    Match {
        role: String,
        #[serde(rename = "matchPercentage")]
        match_percentage: f64,
        #[serde(rename = "matchedSkills")]
        matched_skills: Vec<SkillPhrase>,
        slots: Vec<BookingSlot>,
    },
    NotMatch {
        role: String,
        #[serde(rename = "matchPercentage")]
        match_percentage: f64,
        #[serde(rename = "matchedSkills")]
        matched_skills: Vec<SkillPhrase>,
        #[serde(rename = "missingSkills")]
        missing_skills: Vec<SkillPhrase>,
        guidance: Guidance,
    },
    Error {
        message: String,
    },
}

impl From<MatchResult> for AnalysisResponse {
    fn from(result: MatchResult) -> Self {
        let match_percentage = result.score.percentage();

        match result.outcome {
            Outcome::Match { slots } => AnalysisResponse::Match {
                role: result.role,
                match_percentage,
                matched_skills: result.score.matched,
                slots,
            },
            Outcome::NotMatch { guidance } => AnalysisResponse::NotMatch {
                role: result.role,
                match_percentage,
                matched_skills: result.score.matched,
                missing_skills: result.score.missing,
                guidance,
            },
        }
    }
}

/// Role listing entry
#[derive(Debug, Clone, Serialize)]
pub struct RoleSummary {
    pub role: String,
    #[serde(rename = "requiredSkills")]
    pub required_skills: Vec<SkillPhrase>,
}

impl From<&RoleProfile> for RoleSummary {
    fn from(profile: &RoleProfile) -> Self {
        Self {
            role: profile.name().to_string(),
            required_skills: profile.required_skills().to_vec(),
        }
    }
}

/// Open interview slots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotsResponse {
    pub slots: Vec<BookingSlot>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub roles: usize,
}


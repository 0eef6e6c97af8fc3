use crate::core::{
    catalog::{RoleCatalog, RoleNotFound},
    guidance::{compose_guidance, Guidance},
    matcher::match_phrases,
    scoring::{score, SkillScore, DEFAULT_THRESHOLD},
};
use crate::models::{BookingSlot, Decision, ExtractedDocument};
use crate::services::{ExtractionError, SlotRegistry};
use std::sync::Arc;
use thiserror::Error;

/// Pipeline failures surfaced to the caller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Job role not found: {0}")]
    RoleNotFound(String),

    #[error("Could not extract text from document: {0}")]
    ExtractionFailed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<RoleNotFound> for AnalysisError {
    fn from(err: RoleNotFound) -> Self {
        AnalysisError::RoleNotFound(err.0)
    }
}

impl From<ExtractionError> for AnalysisError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::UnsupportedType(_) | ExtractionError::TooLarge { .. } => {
                AnalysisError::InvalidInput(err.to_string())
            }
            ExtractionError::Pdf(_) | ExtractionError::InvalidText(_) | ExtractionError::Task(_) => {
                AnalysisError::ExtractionFailed(err.to_string())
            }
        }
    }
}

/// What gets attached to a scored result
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Match { slots: Vec<BookingSlot> },
    NotMatch { guidance: Guidance },
}

/// Result of one analysis request
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub role: String,
    pub score: SkillScore,
    pub outcome: Outcome,
}

impl MatchResult {
    pub fn decision(&self) -> Decision {
        self.score.decision
    }
}

/// Per-request analysis pipeline
///
/// # Pipeline Stages
/// 1. Resolve the role in the catalog
/// 2. Check the extracted text
/// 3. Match the role's vocabulary against the text
/// 4. Score against the required list and threshold
/// 5. Attach open slots (Match) or skill-gap guidance (NotMatch)
///
/// Holds only read-only state besides the slot registry, so one instance is
/// shared across all workers.
#[derive(Debug, Clone)]
pub struct Analyzer {
    catalog: Arc<RoleCatalog>,
    slots: Arc<SlotRegistry>,
    threshold: f64,
}

impl Analyzer {
    pub fn new(catalog: Arc<RoleCatalog>, slots: Arc<SlotRegistry>, threshold: f64) -> Self {
        Self {
            catalog,
            slots,
            threshold,
        }
    }

    pub fn with_default_threshold(catalog: Arc<RoleCatalog>, slots: Arc<SlotRegistry>) -> Self {
        Self::new(catalog, slots, DEFAULT_THRESHOLD)
    }

    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    pub fn slots(&self) -> &SlotRegistry {
        &self.slots
    }

    /// Threshold used when a request does not carry its own
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Score a document against a role
    ///
    /// # Arguments
    /// * `role_name` - Role to score against, matched case-insensitively
    /// * `document` - Text produced by the extraction step
    /// * `threshold` - Optional per-request override of the default threshold
    pub fn analyze(
        &self,
        role_name: &str,
        document: &ExtractedDocument,
        threshold: Option<f64>,
    ) -> Result<MatchResult, AnalysisError> {
        let threshold = threshold.unwrap_or(self.threshold);
        if !(0.0..=1.0).contains(&threshold) {
            return Err(AnalysisError::InvalidInput(format!(
                "threshold must be between 0 and 1, got {}",
                threshold
            )));
        }

        let profile = self.catalog.lookup(role_name)?;
        tracing::debug!("Role resolved: {}", profile.name());

        if document.is_empty() {
            tracing::info!(
                "Empty document for role {} (content length known: {})",
                profile.name(),
                document.content_length_known
            );
            return Err(AnalysisError::ExtractionFailed("no text found in document".to_string()));
        }

        let matched = match_phrases(&document.text, profile.index());
        tracing::debug!("Matched {} phrases for role {}", matched.len(), profile.name());

        let score = score(profile.required_skills(), &matched, threshold);

        let outcome = match score.decision {
            Decision::Match => Outcome::Match {
                slots: self.slots.available_slots(),
            },
            Decision::NotMatch => Outcome::NotMatch {
                guidance: compose_guidance(&profile, &score.missing),
            },
        };

        tracing::info!(
            "Scored document for {}: {}/{} skills ({:.2}%), {:?}",
            profile.name(),
            score.ratio.matched,
            score.ratio.total,
            score.percentage(),
            score.decision
        );

        Ok(MatchResult {
            role: profile.name().to_string(),
            score,
            outcome,
        })
    }
}

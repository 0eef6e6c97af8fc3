//! Resume Screen - skill-phrase matching of résumés against role profiles
//!
//! This library scores a document's text against a role's required skills:
//! it tokenizes the text, finds the role's skill phrases on token boundaries,
//! computes a match ratio, and applies a threshold decision. Matches get open
//! interview slots, non-matches get skill-gap guidance.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{match_phrases, score, AnalysisError, Analyzer, RoleCatalog, VocabularyIndex};
pub use crate::models::{AnalysisResponse, Decision, ExtractedDocument, MatchRatio, SkillPhrase};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let catalog = RoleCatalog::builtin().unwrap();
        let profile = catalog.lookup("php developer").unwrap();
        let matched = match_phrases("PHP and Laravel", profile.index());
        assert_eq!(matched.len(), 2);
    }
}

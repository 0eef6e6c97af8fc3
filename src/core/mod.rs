// Core pipeline exports
pub mod analyzer;
pub mod catalog;
pub mod guidance;
pub mod matcher;
pub mod scoring;
pub mod tokenizer;
pub mod vocabulary;

pub use analyzer::{AnalysisError, Analyzer, MatchResult, Outcome};
pub use catalog::{CatalogError, RoleCatalog, RoleNotFound, RoleProfile};
pub use guidance::{compose_guidance, Guidance, SkillRecommendation};
pub use matcher::match_phrases;
pub use scoring::{score, SkillScore, DEFAULT_THRESHOLD};
pub use tokenizer::tokenize;
pub use vocabulary::VocabularyIndex;

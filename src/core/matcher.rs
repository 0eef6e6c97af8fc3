use crate::core::{tokenizer::tokenize, vocabulary::VocabularyIndex};
use crate::models::SkillPhrase;
use std::collections::HashSet;

/// Extract the vocabulary phrases that literally occur in `text`
///
/// Matching is case-insensitive and aligned on token boundaries. A phrase is
/// reported once however often it occurs; nested phrases ("agile" inside
/// "agile methodologies") are independent entries and can both match.
///
/// Empty text yields an empty set.
pub fn match_phrases(text: &str, index: &VocabularyIndex) -> HashSet<SkillPhrase> {
    let mut matched = HashSet::new();
    if index.is_empty() {
        return matched;
    }

    let tokens = tokenize(text);

    for start in 0..tokens.len() {
        for id in index.matches_at(&tokens, start) {
            matched.insert(index.phrase(id).clone());
        }

        // Every phrase already found, nothing left to look for
        if matched.len() == index.len() {
            break;
        }
    }

    tracing::trace!(
        "Matched {} of {} phrases over {} tokens",
        matched.len(),
        index.len(),
        tokens.len()
    );

    matched
}

use crate::core::tokenizer::tokenize;
use crate::models::SkillPhrase;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<String, TrieNode>,
    /// Indexes into `VocabularyIndex::phrases` of phrases ending here
    terminals: Vec<usize>,
}

/// Token trie over a role's skill phrases
///
/// Each edge is one token. Built once and never mutated, so it can be shared
/// between concurrent requests behind an `Arc`.
#[derive(Debug, Default)]
pub struct VocabularyIndex {
    root: TrieNode,
    phrases: Vec<SkillPhrase>,
    max_phrase_tokens: usize,
}

impl VocabularyIndex {
    /// Build an index from an ordered sequence of phrases
    ///
    /// Duplicates (case-insensitive) are dropped silently. Phrases that yield
    /// no tokens are ignored.
    pub fn build<I>(phrases: I) -> Self
    where
        I: IntoIterator<Item = SkillPhrase>,
    {
        let mut index = Self::default();
        let mut seen = HashSet::new();

        for phrase in phrases {
            if !seen.insert(phrase.key().to_string()) {
                continue;
            }

            let tokens = tokenize(phrase.key());
            if tokens.is_empty() {
                continue;
            }

            let id = index.phrases.len();
            index.max_phrase_tokens = index.max_phrase_tokens.max(tokens.len());

            let mut node = &mut index.root;
            for token in tokens {
                node = node.children.entry(token).or_default();
            }
            node.terminals.push(id);
            index.phrases.push(phrase);
        }

        index
    }

    /// Registered phrases in registration order
    pub fn phrases(&self) -> &[SkillPhrase] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Longest phrase length in tokens
    pub fn max_phrase_tokens(&self) -> usize {
        self.max_phrase_tokens
    }

    /// Phrase ids whose token sequence starts at `tokens[start]`
    pub(crate) fn matches_at<'a>(&'a self, tokens: &'a [String], start: usize) -> impl Iterator<Item = usize> + 'a {
        let mut node = Some(&self.root);
        let mut position = start;

        std::iter::from_fn(move || loop {
            let current = node?;
            let token = tokens.get(position)?;
            position += 1;

            node = current.children.get(token);
            if let Some(next) = node {
                if !next.terminals.is_empty() {
                    return Some(next.terminals.as_slice());
                }
            }
        })
        .flatten()
        .copied()
    }

    pub(crate) fn phrase(&self, id: usize) -> &SkillPhrase {
        &self.phrases[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(labels: &[&str]) -> Vec<SkillPhrase> {
        labels.iter().filter_map(SkillPhrase::new).collect()
    }

    #[test]
    fn test_build_deduplicates() {
        let index = VocabularyIndex::build(phrases(&["SQL", "sql", "Excel", " SQL "]));
        assert_eq!(index.len(), 2);
        assert_eq!(index.phrases()[0].label(), "SQL");
        assert_eq!(index.phrases()[1].label(), "Excel");
    }

    #[test]
    fn test_max_phrase_tokens() {
        let index = VocabularyIndex::build(phrases(&["git", "google tag manager", "a/b testing"]));
        assert_eq!(index.max_phrase_tokens(), 4);
    }

    #[test]
    fn test_matches_at_reports_nested_phrases() {
        let index = VocabularyIndex::build(phrases(&["agile", "agile methodologies"]));
        let tokens = tokenize("agile methodologies");

        let ids: Vec<usize> = index.matches_at(&tokens, 0).collect();
        assert_eq!(ids, vec![0, 1]);

        let ids: Vec<usize> = index.matches_at(&tokens, 1).collect();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_empty_index() {
        let index = VocabularyIndex::build(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.max_phrase_tokens(), 0);
    }
}

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Canonical, possibly multi-word, skill label
///
/// Equality, ordering and hashing use the lowercase key, so "Power BI" and
/// "power bi" are the same skill. The original label is kept for output.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "String")]
pub struct SkillPhrase {
    label: String,
    key: String,
}

impl SkillPhrase {
    /// Register a phrase, stripping leading/trailing whitespace
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn new(label: impl AsRef<str>) -> Option<Self> {
        let label = label.as_ref().trim();
        if label.is_empty() {
            return None;
        }

        Some(Self {
            label: label.to_string(),
            key: label.to_lowercase(),
        })
    }

    /// Label as registered
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Lowercase comparison key
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl TryFrom<String> for SkillPhrase {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SkillPhrase::new(&value).ok_or_else(|| "skill phrase must not be empty".to_string())
    }
}

impl PartialEq for SkillPhrase {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for SkillPhrase {}

impl Hash for SkillPhrase {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for SkillPhrase {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SkillPhrase {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for SkillPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl Serialize for SkillPhrase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label)
    }
}

/// External learning reference attached to a missing skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemediationResource {
    pub name: String,
    pub platform: String,
    pub url: String,
}

/// Interview slot owned by the booking registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSlot {
    pub date: String,
    pub time: String,
    pub available: bool,
}

/// Raw text handed to the analysis pipeline by the extraction step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    pub text: String,
    /// Whether the upload declared its size up front
    pub content_length_known: bool,
}

impl ExtractedDocument {
    pub fn new(text: impl Into<String>, content_length_known: bool) -> Self {
        Self {
            text: text.into(),
            content_length_known,
        }
    }

    /// No usable text was produced
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Threshold decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Match,
    NotMatch,
}

/// Matched-required-skills count over total-required-skills count
///
/// Kept as an exact rational so the reported percentage can be rounded
/// without floating point drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRatio {
    pub matched: usize,
    pub total: usize,
}

impl MatchRatio {
    pub fn new(matched: usize, total: usize) -> Self {
        Self { matched, total }
    }

    /// Ratio in [0, 1]; an empty total is reported as 0
    pub fn value(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.matched as f64 / self.total as f64
    }

    /// Percentage rounded to two decimals, round-half-to-even
    ///
    /// Computed in integer basis points: 2/3 gives 66.67, 1/32 gives 3.12.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        let numerator = self.matched as u128 * 10_000;
        let denominator = self.total as u128;
        let mut basis_points = numerator / denominator;
        let remainder = numerator % denominator;

        let twice = remainder * 2;
        if twice > denominator || (twice == denominator && basis_points % 2 == 1) {
            basis_points += 1;
        }

        basis_points as f64 / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_skill_phrase_trims_and_lowercases() {
        let phrase = SkillPhrase::new("  Power BI ").unwrap();
        assert_eq!(phrase.label(), "Power BI");
        assert_eq!(phrase.key(), "power bi");
    }

    #[test]
    fn test_skill_phrase_rejects_blank() {
        assert!(SkillPhrase::new("   ").is_none());
        assert!(SkillPhrase::try_from(String::new()).is_err());
    }

    #[test]
    fn test_skill_phrase_case_insensitive_identity() {
        let mut set = HashSet::new();
        set.insert(SkillPhrase::new("SQL").unwrap());
        assert!(set.contains(&SkillPhrase::new("sql").unwrap()));
        assert!(!set.insert(SkillPhrase::new("Sql").unwrap()));
    }

    #[test]
    fn test_skill_phrase_serializes_label() {
        let phrase = SkillPhrase::new("Google Ads").unwrap();
        assert_eq!(serde_json::to_string(&phrase).unwrap(), "\"Google Ads\"");
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(MatchRatio::new(2, 3).percentage(), 66.67);
        assert_eq!(MatchRatio::new(1, 3).percentage(), 33.33);
        assert_eq!(MatchRatio::new(3, 5).percentage(), 60.0);
        // 3.125 exactly: ties go to the even neighbour
        assert_eq!(MatchRatio::new(1, 32).percentage(), 3.12);
        // 9.375 exactly
        assert_eq!(MatchRatio::new(3, 32).percentage(), 9.38);
    }

    #[test]
    fn test_ratio_value() {
        assert_eq!(MatchRatio::new(3, 5).value(), 0.6);
        assert_eq!(MatchRatio::new(0, 5).value(), 0.0);
        assert_eq!(MatchRatio::new(5, 5).value(), 1.0);
    }
}

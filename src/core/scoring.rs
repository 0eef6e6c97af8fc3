use crate::models::{Decision, MatchRatio, SkillPhrase};
use std::collections::HashSet;

/// Default match threshold
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Outcome of reconciling required skills against matched skills
#[derive(Debug, Clone, PartialEq)]
pub struct SkillScore {
    /// Required skills present in the document, in required order
    pub matched: Vec<SkillPhrase>,
    /// Required skills absent from the document, in required order
    pub missing: Vec<SkillPhrase>,
    pub ratio: MatchRatio,
    pub decision: Decision,
}

impl SkillScore {
    /// Reported percentage, see [`MatchRatio::percentage`]
    pub fn percentage(&self) -> f64 {
        self.ratio.percentage()
    }
}

/// Score matched skills against a role's required list
///
/// Scoring formula:
/// ratio = |required ∩ matched| / |required|
/// decision = Match when ratio >= threshold
///
/// `required` is non-empty for every catalog role. An empty `matched` set is
/// a plain NotMatch with ratio 0.
pub fn score(required: &[SkillPhrase], matched: &HashSet<SkillPhrase>, threshold: f64) -> SkillScore {
    let (hits, missing): (Vec<SkillPhrase>, Vec<SkillPhrase>) = required
        .iter()
        .cloned()
        .partition(|skill| matched.contains(skill));

    let ratio = MatchRatio::new(hits.len(), required.len());

    let decision = if ratio.value() >= threshold {
        Decision::Match
    } else {
        Decision::NotMatch
    };

    SkillScore {
        matched: hits,
        missing,
        ratio,
        decision,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(labels: &[&str]) -> Vec<SkillPhrase> {
        labels.iter().filter_map(SkillPhrase::new).collect()
    }

    fn labels(skills: &[SkillPhrase]) -> Vec<&str> {
        skills.iter().map(SkillPhrase::label).collect()
    }

    #[test]
    fn test_business_analyst_scenario() {
        let required = phrases(&["sql", "excel", "tableau", "power bi", "data analysis"]);
        let matched: HashSet<SkillPhrase> = phrases(&["SQL", "Excel", "Data Analysis"]).into_iter().collect();

        let at_060 = score(&required, &matched, 0.6);
        assert_eq!(at_060.ratio, MatchRatio::new(3, 5));
        assert_eq!(at_060.decision, Decision::Match);
        assert_eq!(at_060.percentage(), 60.0);

        let at_070 = score(&required, &matched, 0.7);
        assert_eq!(at_070.decision, Decision::NotMatch);
        assert_eq!(labels(&at_070.matched), vec!["sql", "excel", "data analysis"]);
        assert_eq!(labels(&at_070.missing), vec!["tableau", "power bi"]);
    }

    #[test]
    fn test_all_matched() {
        let required = phrases(&["git", "version control"]);
        let matched: HashSet<SkillPhrase> = required.iter().cloned().collect();

        let result = score(&required, &matched, 1.0);
        assert_eq!(result.ratio.value(), 1.0);
        assert_eq!(result.decision, Decision::Match);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_nothing_matched() {
        let required = phrases(&["git", "version control"]);
        let result = score(&required, &HashSet::new(), 0.01);

        assert_eq!(result.ratio.value(), 0.0);
        assert_eq!(result.decision, Decision::NotMatch);
        assert!(result.matched.is_empty());
        assert_eq!(result.missing, required);
    }

    #[test]
    fn test_zero_threshold_always_matches() {
        let required = phrases(&["git"]);
        assert_eq!(score(&required, &HashSet::new(), 0.0).decision, Decision::Match);
    }

    #[test]
    fn test_extra_matches_ignored() {
        let required = phrases(&["git"]);
        let matched: HashSet<SkillPhrase> = phrases(&["git", "docker", "kubernetes"]).into_iter().collect();

        let result = score(&required, &matched, DEFAULT_THRESHOLD);
        assert_eq!(result.ratio, MatchRatio::new(1, 1));
    }

    #[test]
    fn test_two_thirds_percentage() {
        let required = phrases(&["a", "b", "c"]);
        let matched: HashSet<SkillPhrase> = phrases(&["a", "b"]).into_iter().collect();
        assert_eq!(score(&required, &matched, DEFAULT_THRESHOLD).percentage(), 66.67);
    }
}

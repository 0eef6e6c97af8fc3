// Unit tests for Resume Screen

use resume_screen::core::{match_phrases, score, tokenize, RoleCatalog, VocabularyIndex};
use resume_screen::models::{Decision, MatchRatio, SkillPhrase};
use std::collections::HashSet;

fn phrases(labels: &[&str]) -> Vec<SkillPhrase> {
    labels.iter().filter_map(SkillPhrase::new).collect()
}

#[test]
fn test_every_role_full_match() {
    let catalog = RoleCatalog::builtin().unwrap();

    for profile in catalog.profiles() {
        let matched: HashSet<SkillPhrase> = profile.required_skills().iter().cloned().collect();
        let result = score(profile.required_skills(), &matched, 1.0);

        assert_eq!(result.ratio.value(), 1.0, "role {}", profile.name());
        assert_eq!(result.decision, Decision::Match, "role {}", profile.name());
    }
}

#[test]
fn test_every_role_no_match() {
    let catalog = RoleCatalog::builtin().unwrap();

    for profile in catalog.profiles() {
        for threshold in [0.01, 0.5, 1.0] {
            let result = score(profile.required_skills(), &HashSet::new(), threshold);

            assert_eq!(result.ratio.value(), 0.0);
            assert_eq!(result.decision, Decision::NotMatch);
            assert_eq!(result.missing.as_slice(), profile.required_skills());
        }
    }
}

#[test]
fn test_every_role_matches_its_own_skill_list() {
    let catalog = RoleCatalog::builtin().unwrap();

    for profile in catalog.profiles() {
        let text: Vec<&str> = profile.required_skills().iter().map(SkillPhrase::label).collect();
        let matched = match_phrases(&text.join(", "), profile.index());
        assert_eq!(matched.len(), profile.required_skills().len(), "role {}", profile.name());
    }
}

#[test]
fn test_matching_is_idempotent() {
    let index = VocabularyIndex::build(phrases(&["sql", "power bi", "data analysis"]));
    let text = "Built Power BI dashboards on top of SQL for data analysis.";

    assert_eq!(match_phrases(text, &index), match_phrases(text, &index));
}

#[test]
fn test_matching_is_case_insensitive() {
    let index = VocabularyIndex::build(phrases(&["python"]));

    assert_eq!(match_phrases("PYTHON", &index).len(), 1);
    assert_eq!(match_phrases("python", &index).len(), 1);
    assert_eq!(match_phrases("PyThOn", &index).len(), 1);
}

#[test]
fn test_word_boundary() {
    let index = VocabularyIndex::build(phrases(&["java"]));
    assert!(match_phrases("javascript", &index).is_empty());
}

#[test]
fn test_multi_word_phrase_is_one_unit() {
    let index = VocabularyIndex::build(phrases(&["agile methodologies"]));
    let matched = match_phrases("the project used agile methodologies here", &index);

    assert_eq!(matched.len(), 1);
    assert!(matched.contains(&SkillPhrase::new("agile methodologies").unwrap()));
    assert!(!matched.contains(&SkillPhrase::new("methodologies").unwrap()));
}

#[test]
fn test_business_analyst_scenario() {
    let required = phrases(&["sql", "excel", "tableau", "power bi", "data analysis"]);
    let index = VocabularyIndex::build(required.clone());
    let matched = match_phrases("Skills: SQL, Excel, Data Analysis", &index);

    assert_eq!(matched.len(), 3);

    let at_060 = score(&required, &matched, 0.6);
    assert_eq!(at_060.ratio.value(), 0.6);
    assert_eq!(at_060.decision, Decision::Match);

    let at_070 = score(&required, &matched, 0.7);
    assert_eq!(at_070.decision, Decision::NotMatch);
    assert_eq!(at_070.missing, phrases(&["tableau", "power bi"]));
}

#[test]
fn test_percentage_rounding_rule() {
    assert_eq!(MatchRatio::new(2, 3).percentage(), 66.67);
    assert_eq!(MatchRatio::new(1, 32).percentage(), 3.12);
    assert_eq!(format!("{:.2}", MatchRatio::new(2, 3).percentage()), "66.67");
}

#[test]
fn test_tokenizer_public() {
    assert_eq!(tokenize("Google Tag Manager"), vec!["google", "tag", "manager"]);
}

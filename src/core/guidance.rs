use crate::core::catalog::RoleProfile;
use crate::models::{RemediationResource, SkillPhrase};
use serde::Serialize;

/// Learning suggestions for one missing skill
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillRecommendation {
    pub skill: SkillPhrase,
    pub resources: Vec<RemediationResource>,
}

/// Skill-gap guidance attached to a NotMatch result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Guidance {
    pub message: String,
    pub recommendations: Vec<SkillRecommendation>,
}

/// Compose guidance for the skills a document is missing
///
/// One recommendation per missing skill, in required order. Skills without
/// catalog resources carry an empty list.
pub fn compose_guidance(profile: &RoleProfile, missing: &[SkillPhrase]) -> Guidance {
    let recommendations = missing
        .iter()
        .map(|skill| SkillRecommendation {
            skill: skill.clone(),
            resources: profile.resources_for(skill).to_vec(),
        })
        .collect();

    let skills: Vec<&str> = missing.iter().map(SkillPhrase::label).collect();
    let message = format!(
        "To strengthen your profile for the role of {}, consider building skills in: {}.",
        profile.name(),
        skills.join(", ")
    );

    Guidance {
        message,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::RoleCatalog;

    #[test]
    fn test_guidance_attaches_resources() {
        let catalog = RoleCatalog::builtin().unwrap();
        let profile = catalog.lookup("business analyst").unwrap();
        let missing: Vec<SkillPhrase> = ["SQL", "Excel"].iter().filter_map(SkillPhrase::new).collect();

        let guidance = compose_guidance(&profile, &missing);

        assert_eq!(guidance.recommendations.len(), 2);
        assert_eq!(guidance.recommendations[0].skill.label(), "SQL");
        assert_eq!(guidance.recommendations[0].resources.len(), 2);
        assert!(guidance.recommendations[1].resources.is_empty());
        assert_eq!(
            guidance.message,
            "To strengthen your profile for the role of business analyst, consider building skills in: SQL, Excel."
        );
    }

    #[test]
    fn test_guidance_serializes_skill_label() {
        let catalog = RoleCatalog::builtin().unwrap();
        let profile = catalog.lookup("python developer").unwrap();
        let missing = vec![SkillPhrase::new("CSS").unwrap()];

        let json = serde_json::to_value(compose_guidance(&profile, &missing)).unwrap();
        assert_eq!(json["recommendations"][0]["skill"], "CSS");
        assert_eq!(json["recommendations"][0]["resources"], serde_json::json!([]));
    }
}

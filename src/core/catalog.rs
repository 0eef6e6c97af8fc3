use crate::core::vocabulary::VocabularyIndex;
use crate::models::{RemediationResource, SkillPhrase};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Role catalog shipped with the service
const BUILTIN_CATALOG: &str = include_str!("../../config/roles.toml");

/// Errors raised while loading the role catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Role name must not be empty")]
    EmptyRoleName,

    #[error("Duplicate role: {0}")]
    DuplicateRole(String),

    #[error("Role '{0}' has no required skills")]
    NoRequiredSkills(String),

    #[error("Role '{role}' lists a resource for '{skill}', which is not a required skill")]
    UnknownResourceSkill { role: String, skill: String },
}

/// Lookup failure for a role name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Job role not found: {0}")]
pub struct RoleNotFound(pub String);

/// On-disk representation of the catalog
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    roles: Vec<RoleEntry>,
}

#[derive(Debug, Deserialize)]
struct RoleEntry {
    name: String,
    required_skills: Vec<SkillPhrase>,
    #[serde(default)]
    resources: Vec<ResourceEntry>,
}

#[derive(Debug, Deserialize)]
struct ResourceEntry {
    skill: SkillPhrase,
    name: String,
    platform: String,
    url: String,
}

/// Required skills and remediation resources for one role
#[derive(Debug)]
pub struct RoleProfile {
    name: String,
    required_skills: Vec<SkillPhrase>,
    resources: HashMap<SkillPhrase, Vec<RemediationResource>>,
    index: VocabularyIndex,
}

impl RoleProfile {
    /// Build a profile, validating the non-empty skill invariant
    ///
    /// Duplicate skills are collapsed, keeping the first occurrence.
    pub fn new(
        name: &str,
        required_skills: Vec<SkillPhrase>,
        resources: HashMap<SkillPhrase, Vec<RemediationResource>>,
    ) -> Result<Self, CatalogError> {
        let name = normalize_role_name(name);
        if name.is_empty() {
            return Err(CatalogError::EmptyRoleName);
        }

        let mut seen = HashSet::new();
        let required_skills: Vec<SkillPhrase> = required_skills
            .into_iter()
            .filter(|skill| seen.insert(skill.clone()))
            .collect();

        if required_skills.is_empty() {
            return Err(CatalogError::NoRequiredSkills(name));
        }

        if let Some(skill) = resources.keys().find(|skill| !seen.contains(*skill)) {
            return Err(CatalogError::UnknownResourceSkill {
                role: name,
                skill: skill.label().to_string(),
            });
        }

        let index = VocabularyIndex::build(required_skills.iter().cloned());

        Ok(Self {
            name,
            required_skills,
            resources,
            index,
        })
    }

    /// Normalized role name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Required skills in catalog order; never empty
    pub fn required_skills(&self) -> &[SkillPhrase] {
        &self.required_skills
    }

    /// Remediation resources for a skill, empty when none are defined
    pub fn resources_for(&self, skill: &SkillPhrase) -> &[RemediationResource] {
        self.resources.get(skill).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Phrase index over the required skills
    pub fn index(&self) -> &VocabularyIndex {
        &self.index
    }
}

/// Immutable registry of role profiles keyed by normalized name
#[derive(Debug, Default)]
pub struct RoleCatalog {
    roles: BTreeMap<String, Arc<RoleProfile>>,
}

impl RoleCatalog {
    /// Catalog embedded in the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Load a catalog from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    /// Parse and validate a catalog
    ///
    /// ```toml
    /// [[roles]]
    /// name = "python developer"
    /// required_skills = ["python", "HTML"]
    ///
    /// [[roles.resources]]
    /// skill = "python"
    /// name = "Python for Everybody"
    /// platform = "Coursera"
    /// url = "https://www.coursera.org/specializations/python"
    /// ```
    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(raw)?;
        let mut catalog = Self::default();

        for entry in file.roles {
            let mut resources: HashMap<SkillPhrase, Vec<RemediationResource>> = HashMap::new();
            for resource in entry.resources {
                resources.entry(resource.skill).or_default().push(RemediationResource {
                    name: resource.name,
                    platform: resource.platform,
                    url: resource.url,
                });
            }

            let profile = RoleProfile::new(&entry.name, entry.required_skills, resources)?;
            catalog.insert(profile)?;
        }

        tracing::debug!("Role catalog loaded with {} roles", catalog.len());

        Ok(catalog)
    }

    /// Register a profile; names must be unique after normalization
    pub fn insert(&mut self, profile: RoleProfile) -> Result<(), CatalogError> {
        if self.roles.contains_key(profile.name()) {
            return Err(CatalogError::DuplicateRole(profile.name().to_string()));
        }
        self.roles.insert(profile.name().to_string(), Arc::new(profile));
        Ok(())
    }

    /// Resolve a role name, case-insensitively and ignoring surrounding whitespace
    pub fn lookup(&self, role_name: &str) -> Result<Arc<RoleProfile>, RoleNotFound> {
        let key = normalize_role_name(role_name);
        self.roles
            .get(&key)
            .cloned()
            .ok_or_else(|| RoleNotFound(role_name.trim().to_string()))
    }

    /// Role names in sorted order
    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }

    pub fn profiles(&self) -> impl Iterator<Item = &Arc<RoleProfile>> {
        self.roles.values()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

/// Lowercase, trim, and collapse internal whitespace
fn normalize_role_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

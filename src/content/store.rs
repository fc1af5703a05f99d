// Content store: read-only accessors over the bundled portfolio document.
// The JSON is embedded at compile time; parsing happens once at startup.

use std::collections::HashSet;

use crate::error::{FolioError, Result};

use super::types::{Contact, Hero, JourneyEntry, MajorProject, Portfolio, SideMission, SiteConfig};

const SITE_JSON: &str = include_str!("../../content/site.json");

/// Read-only store over the portfolio document.
#[derive(Debug)]
pub struct ContentStore {
    portfolio: Portfolio,
}

impl ContentStore {
    /// Parse and validate the bundled document. A malformed bundle is a
    /// packaging defect and fails startup with an explicit error.
    pub fn load() -> Result<Self> {
        Self::from_json(SITE_JSON)
    }

    fn from_json(json: &str) -> Result<Self> {
        let portfolio: Portfolio = serde_json::from_str(json)?;
        validate_ids(&portfolio)?;
        Ok(Self { portfolio })
    }

    pub fn hero(&self) -> &Hero {
        &self.portfolio.hero
    }

    pub fn major_projects(&self) -> &[MajorProject] {
        &self.portfolio.major_projects
    }

    pub fn side_missions(&self) -> &[SideMission] {
        &self.portfolio.side_missions
    }

    pub fn journey(&self) -> &[JourneyEntry] {
        &self.portfolio.journey
    }

    pub fn skills(&self) -> &[String] {
        &self.portfolio.skills
    }

    pub fn contact(&self) -> &Contact {
        &self.portfolio.contact
    }

    pub fn config(&self) -> &SiteConfig {
        &self.portfolio.config
    }
}

/// Identifiers must be unique within each list.
fn validate_ids(portfolio: &Portfolio) -> Result<()> {
    check_unique("project", portfolio.major_projects.iter().map(|p| p.id.as_str()))?;
    check_unique(
        "side mission",
        portfolio.side_missions.iter().map(|m| m.id.as_str()),
    )?;
    check_unique("journey entry", portfolio.journey.iter().map(|j| j.id.as_str()))?;
    Ok(())
}

fn check_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FolioError::Other(format!("duplicate {} id: {}", kind, id)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_document_loads() {
        let store = ContentStore::load().unwrap();
        assert!(!store.hero().name.is_empty());
        assert!(!store.major_projects().is_empty());
        assert!(!store.side_missions().is_empty());
        assert!(!store.journey().is_empty());
        assert!(!store.skills().is_empty());
        assert!(!store.config().github.username.is_empty());
    }

    #[test]
    fn test_duplicate_project_id_rejected() {
        let json = r#"{
            "hero": { "name": "A", "tagline": "t", "oneLiner": "o" },
            "majorProjects": [
                { "id": "p1", "title": "One", "company": "X",
                  "problem": "p", "approach": "a", "outcome": "o",
                  "technologies": [] },
                { "id": "p1", "title": "Two", "company": "Y",
                  "problem": "p", "approach": "a", "outcome": "o",
                  "technologies": [] }
            ],
            "sideMissions": [],
            "journey": [],
            "skills": [],
            "contact": { "email": "a@b.c", "github": "g", "linkedin": "l" },
            "config": { "siteName": "s", "siteUrl": "u", "description": "d" }
        }"#;

        let err = ContentStore::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate project id: p1"));
    }

    #[test]
    fn test_github_section_defaults() {
        let json = r#"{
            "hero": { "name": "A", "tagline": "t", "oneLiner": "o" },
            "majorProjects": [],
            "sideMissions": [],
            "journey": [],
            "skills": [],
            "contact": { "email": "a@b.c", "github": "g", "linkedin": "l" },
            "config": { "siteName": "s", "siteUrl": "u", "description": "d" }
        }"#;

        let store = ContentStore::from_json(json).unwrap();
        assert_eq!(store.config().github.per_page, 100);
        assert_eq!(store.config().github.exclude_topics, vec!["major"]);
    }
}

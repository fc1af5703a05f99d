// GitHub API response types.
// Only the fields the side-missions view consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of a public repository from the user listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_repo() {
        // The listing endpoint omits topics unless requested and leaves
        // homepage null for most repos.
        let json = r#"{
            "id": 42,
            "name": "demo",
            "description": null,
            "html_url": "https://github.com/demo/demo"
        }"#;

        let repo: RepoSummary = serde_json::from_str(json).unwrap();
        assert_eq!(repo.id, 42);
        assert_eq!(repo.name, "demo");
        assert!(repo.description.is_none());
        assert!(repo.topics.is_empty());
        assert!(repo.updated_at.is_none());
        assert_eq!(repo.stargazers_count, 0);
    }
}

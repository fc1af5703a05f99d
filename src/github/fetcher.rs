// Repository fetcher: typed listing call plus topic-exclusion filtering.
// One outbound GET per uncached query; no retry, no request coalescing.

use crate::error::Result;

use super::cache::RepoKey;
use super::client::GitHubClient;
use super::types::RepoSummary;

/// Parameters for one listing fetch.
#[derive(Debug, Clone)]
pub struct RepoQuery {
    pub username: String,
    pub per_page: u32,
    pub exclude_topics: Vec<String>,
}

impl RepoQuery {
    pub fn cache_key(&self) -> RepoKey {
        RepoKey::new(&self.username, self.per_page, &self.exclude_topics)
    }
}

/// Fetch the public repositories for an account and drop every repo
/// whose topics intersect the exclusion set.
pub async fn fetch_repos(client: &GitHubClient, query: &RepoQuery) -> Result<Vec<RepoSummary>> {
    let params = [
        ("per_page", query.per_page.to_string()),
        ("sort", "updated".to_string()),
    ];
    let response = client
        .get_with_params(&format!("/users/{}/repos", query.username), &params)
        .await?;
    let repos: Vec<RepoSummary> = response.json().await.map_err(crate::error::FolioError::Connection)?;
    Ok(filter_excluded(repos, &query.exclude_topics))
}

/// Keep repos with no topic in the exclusion set, in upstream order.
pub fn filter_excluded(repos: Vec<RepoSummary>, exclude: &[String]) -> Vec<RepoSummary> {
    if exclude.is_empty() {
        return repos;
    }
    repos
        .into_iter()
        .filter(|repo| !repo.topics.iter().any(|t| exclude.contains(t)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, topics: &[&str]) -> RepoSummary {
        RepoSummary {
            id: 0,
            name: name.to_string(),
            description: None,
            html_url: format!("https://github.com/demo/{}", name),
            homepage: None,
            topics: topics.iter().map(|t| t.to_string()).collect(),
            language: None,
            stargazers_count: 0,
            updated_at: None,
        }
    }

    #[test]
    fn test_excluded_topics_filtered_in_upstream_order() {
        // account="demo", exclusion=["archived"]:
        // A(topics=[]), B(topics=["archived"]), C(topics=["x"]) -> [A, C]
        let repos = vec![
            repo("A", &[]),
            repo("B", &["archived"]),
            repo("C", &["x"]),
        ];

        let filtered = filter_excluded(repos, &["archived".to_string()]);

        let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_empty_exclusion_keeps_everything() {
        let repos = vec![repo("A", &["x"]), repo("B", &["y"])];
        let filtered = filter_excluded(repos.clone(), &[]);
        assert_eq!(filtered, repos);
    }

    #[test]
    fn test_any_intersection_excludes() {
        let repos = vec![repo("A", &["x", "major", "y"])];
        let filtered = filter_excluded(repos, &["major".to_string()]);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_query_key_matches_cache_key() {
        let query = RepoQuery {
            username: "demo".to_string(),
            per_page: 100,
            exclude_topics: vec!["major".to_string()],
        };
        assert_eq!(
            query.cache_key(),
            RepoKey::new("demo", 100, &["major".to_string()])
        );
    }
}

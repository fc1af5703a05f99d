// In-memory cache for repository listings.
// Keyed by the exact fetch parameters; freshness is judged at read time.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::types::RepoSummary;

/// Entries older than this are treated as absent.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(5 * 60);

/// Cache key: account name, page size, and the exclusion set.
/// Topics are sorted so that key equality ignores caller ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoKey {
    username: String,
    per_page: u32,
    exclude_topics: Vec<String>,
}

impl RepoKey {
    pub fn new(username: &str, per_page: u32, exclude_topics: &[String]) -> Self {
        let mut exclude_topics = exclude_topics.to_vec();
        exclude_topics.sort();
        Self {
            username: username.to_string(),
            per_page,
            exclude_topics,
        }
    }
}

struct CacheEntry {
    repos: Vec<RepoSummary>,
    fetched_at: Instant,
}

/// Session-scoped cache of filtered listings. Owned by the app and only
/// touched from the event loop. Entries are overwritten but never
/// evicted; staleness is a timestamp comparison on read.
#[derive(Default)]
pub struct RepoCache {
    entries: HashMap<RepoKey, CacheEntry>,
}

impl RepoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached listing for a key if it is still fresh.
    pub fn get_fresh(&self, key: &RepoKey) -> Option<&[RepoSummary]> {
        let entry = self.entries.get(key)?;
        if entry.fetched_at.elapsed() < FRESHNESS_WINDOW {
            Some(&entry.repos)
        } else {
            None
        }
    }

    /// Store a successful result. Failed fetches are never cached.
    pub fn insert(&mut self, key: RepoKey, repos: Vec<RepoSummary>) {
        self.entries.insert(
            key,
            CacheEntry {
                repos,
                fetched_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(id: u64, name: &str) -> RepoSummary {
        RepoSummary {
            id,
            name: name.to_string(),
            description: None,
            html_url: format!("https://github.com/demo/{}", name),
            homepage: None,
            topics: Vec::new(),
            language: None,
            stargazers_count: 0,
            updated_at: None,
        }
    }

    #[test]
    fn test_fresh_entry_is_returned() {
        let mut cache = RepoCache::new();
        let key = RepoKey::new("demo", 100, &[]);

        cache.insert(key.clone(), vec![repo(1, "a")]);

        let hit = cache.get_fresh(&key).unwrap();
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].name, "a");
    }

    #[test]
    fn test_stale_entry_treated_as_absent() {
        let mut cache = RepoCache::new();
        let key = RepoKey::new("demo", 100, &[]);

        let stale = Instant::now()
            .checked_sub(FRESHNESS_WINDOW + Duration::from_secs(1))
            .unwrap();
        cache.entries.insert(
            key.clone(),
            CacheEntry {
                repos: vec![repo(1, "a")],
                fetched_at: stale,
            },
        );

        assert!(cache.get_fresh(&key).is_none());
        // Stale entries stay in the map; only reads judge freshness.
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_key_ignores_topic_ordering() {
        let a = RepoKey::new("demo", 50, &["wip".to_string(), "major".to_string()]);
        let b = RepoKey::new("demo", 50, &["major".to_string(), "wip".to_string()]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_parameters_are_distinct_keys() {
        let a = RepoKey::new("demo", 50, &[]);
        let b = RepoKey::new("demo", 100, &[]);
        let c = RepoKey::new("other", 50, &[]);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_insert_overwrites_existing_key() {
        let mut cache = RepoCache::new();
        let key = RepoKey::new("demo", 100, &[]);

        cache.insert(key.clone(), vec![repo(1, "a")]);
        cache.insert(key.clone(), vec![repo(2, "b")]);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get_fresh(&key).unwrap()[0].name, "b");
    }
}

// GitHub API module.
// Client, listing fetch with topic filtering, and the session cache.

#![allow(dead_code, unused_imports)]

pub mod cache;
pub mod client;
pub mod fetcher;
pub mod types;

pub use cache::{FRESHNESS_WINDOW, RepoCache, RepoKey};
pub use client::GitHubClient;
pub use fetcher::{RepoQuery, fetch_repos, filter_excluded};
pub use types::RepoSummary;

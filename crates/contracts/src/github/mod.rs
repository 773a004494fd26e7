//! GitHub repository metadata, as far as the repository cards need it.

use serde::{Deserialize, Serialize};

/// Subset of `GET /repos/{owner}/{repo}`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RepoSummary {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Session-storage entry for a set of repositories.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CachedRepos {
    pub data: Vec<RepoSummary>,
    /// Write time in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl CachedRepos {
    pub fn is_fresh(&self, now_ms: i64, ttl_ms: i64) -> bool {
        now_ms - self.timestamp < ttl_ms
    }
}

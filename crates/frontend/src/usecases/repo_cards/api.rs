use std::rc::Rc;

use contracts::github::{CachedRepos, RepoSummary};
use futures::future::join_all;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config::SiteSettings;
use crate::shared::clock::Clock;
use crate::shared::loader::Fetcher;
use crate::shared::storage::{KeyValueStore, StorageError};

static REPO_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"github\.com/([^/]+)/([^/]+)").expect("valid repository url pattern"));

#[derive(Debug, Error)]
pub enum RepoCardError {
    #[error("could not encode repository cache entry: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// `(owner, repo)` from a GitHub URL.
pub fn parse_repo_url(url: &str) -> Option<(&str, &str)> {
    let captures = REPO_URL.captures(url)?;
    Some((captures.get(1)?.as_str(), captures.get(2)?.as_str()))
}

pub fn cache_key(prefix: &str, urls: &[String]) -> String {
    format!("{}{}", prefix, urls.join(","))
}

/// Repository metadata with a short-lived session cache in front.
pub struct RepoCards {
    store: Rc<dyn KeyValueStore>,
    clock: Rc<dyn Clock>,
    api_base: String,
    cache_prefix: String,
    ttl_ms: i64,
}

impl RepoCards {
    pub fn new(settings: &SiteSettings, store: Rc<dyn KeyValueStore>, clock: Rc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            api_base: settings.repo_api_base.clone(),
            cache_prefix: settings.repo_cache_prefix.clone(),
            ttl_ms: settings.repo_cache_ttl_ms,
        }
    }

    /// Metadata for every URL that resolves, in the order given. A fresh
    /// cache entry for the same URL set answers without touching the network.
    pub async fn load(
        &self,
        fetcher: &dyn Fetcher,
        urls: &[String],
    ) -> Result<Vec<RepoSummary>, RepoCardError> {
        let key = cache_key(&self.cache_prefix, urls);
        let now = self.clock.now_ms();

        if let Some(cached) = self.read_cache(&key) {
            if cached.is_fresh(now, self.ttl_ms) {
                log::debug!("repository cards served from session cache");
                return Ok(cached.data);
            }
        }

        let fetches = urls.iter().map(|url| self.fetch_repo(fetcher, url));
        let repos: Vec<RepoSummary> = join_all(fetches).await.into_iter().flatten().collect();

        let entry = CachedRepos {
            data: repos,
            timestamp: self.clock.now_ms(),
        };
        self.store.set_item(&key, &serde_json::to_string(&entry)?)?;

        Ok(entry.data)
    }

    fn read_cache(&self, key: &str) -> Option<CachedRepos> {
        let raw = self.store.get_item(key)?;
        match serde_json::from_str(&raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("ignoring unreadable repository cache entry: {}", e);
                None
            }
        }
    }

    async fn fetch_repo(&self, fetcher: &dyn Fetcher, url: &str) -> Option<RepoSummary> {
        let (owner, repo) = parse_repo_url(url)?;
        let endpoint = format!(
            "{}/repos/{}/{}",
            self.api_base,
            urlencoding::encode(owner),
            urlencoding::encode(repo)
        );

        match fetcher.get(&endpoint).await {
            Ok(response) if response.ok() => match serde_json::from_str(&response.body) {
                Ok(summary) => Some(summary),
                Err(e) => {
                    log::warn!("unexpected metadata for {}: {}", url, e);
                    None
                }
            },
            Ok(response) => {
                log::warn!("metadata for {} unavailable: {}", url, response.status);
                None
            }
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        }
    }
}

//! Content loader: network access for JSON documents and raw assets.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Status line and body of a finished request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to load {path}: {status_text}")]
    Status {
        path: String,
        status: u16,
        status_text: String,
    },
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// GET access to the network. No retry and no timeout: a request that never
/// settles keeps its caller suspended.
#[async_trait(?Send)]
pub trait Fetcher {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

/// Browser `fetch` through gloo-net.
pub struct GlooFetcher;

#[async_trait(?Send)]
impl Fetcher for GlooFetcher {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let network = |e: gloo_net::Error| FetchError::Network {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = Request::get(url).send().await.map_err(network)?;
        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.map_err(network)?;

        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}

/// Fetch `path` and parse the body as JSON.
pub async fn load_json<T>(fetcher: &dyn Fetcher, path: &str) -> Result<T, LoadError>
where
    T: DeserializeOwned,
{
    let response = fetcher.get(path).await?;

    if !response.ok() {
        return Err(LoadError::Status {
            path: path.to_string(),
            status: response.status,
            status_text: response.status_text,
        });
    }

    serde_json::from_str(&response.body).map_err(|source| LoadError::Parse {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::FakeFetcher;
    use futures::executor::block_on;
    use serde_json::{json, Value};

    #[test]
    fn test_load_json_success() {
        let fetcher = FakeFetcher::new().with_json("data/global.json", json!({ "a": 1 }));
        let value: Value = block_on(load_json(&fetcher, "data/global.json")).unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn test_load_json_reports_path_and_status_text() {
        let fetcher = FakeFetcher::new().with_status("data/pages/x.json", 404, "Not Found");
        let err = block_on(load_json::<Value>(&fetcher, "data/pages/x.json")).unwrap_err();
        assert_eq!(err.to_string(), "Failed to load data/pages/x.json: Not Found");
    }

    #[test]
    fn test_load_json_parse_error() {
        let fetcher = FakeFetcher::new().with_text("data/global.json", "{ nope");
        let err = block_on(load_json::<Value>(&fetcher, "data/global.json")).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_load_json_network_error() {
        let fetcher = FakeFetcher::new();
        let err = block_on(load_json::<Value>(&fetcher, "data/global.json")).unwrap_err();
        assert!(matches!(err, LoadError::Fetch(_)));
    }
}

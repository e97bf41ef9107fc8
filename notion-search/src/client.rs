//! HTTP client for the Notion REST API.
//!
//! Provides a configured [`reqwest::Client`] with the per-call timeout from
//! [`SearchConfig`] and attaches the bearer and version headers to every
//! request.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::WorkspaceApi;
use crate::config::SearchConfig;
use crate::credential::Credential;
use crate::error::SearchError;

const USER_AGENT: &str = concat!("notion-search/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] configured for API calls.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| SearchError::Config(format!("failed to build HTTP client: {e}")))
}

#[derive(Debug, Serialize)]
struct SearchBody<'a> {
    query: &'a str,
    page_size: usize,
}

#[derive(Debug, Deserialize)]
struct UserInfo {
    #[serde(default)]
    name: Option<String>,
}

/// [`WorkspaceApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    config: SearchConfig,
}

impl NotionClient {
    /// Create a client for the endpoint and timeouts in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            http: build_client(config)?,
            config: config.clone(),
        })
    }

    fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        credential: &Credential,
    ) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.config.endpoint(path))
            .bearer_auth(credential.expose())
            .header("Notion-Version", &self.config.api_version)
    }
}

impl WorkspaceApi for NotionClient {
    async fn workspace_name(&self, credential: &Credential) -> Result<String, SearchError> {
        let response = self
            .request(reqwest::Method::GET, "users/me", credential)
            .send()
            .await
            .map_err(|e| SearchError::from_reqwest("user lookup", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Remote(format!(
                "user lookup returned HTTP {status}"
            )));
        }

        let info: UserInfo = response
            .json()
            .await
            .map_err(|e| SearchError::from_reqwest("user lookup", e))?;

        info.name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| SearchError::Remote("user lookup response has no name".into()))
    }

    async fn search(&self, credential: &Credential, query: &str) -> Result<Vec<Value>, SearchError> {
        tracing::trace!(query, "workspace search");

        let body = SearchBody {
            query,
            page_size: self.config.page_size,
        };
        let response = self
            .request(reqwest::Method::POST, "search", credential)
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchError::from_reqwest("search", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Remote(format!("search returned HTTP {status}")));
        }

        let mut envelope: Value = response
            .json()
            .await
            .map_err(|e| SearchError::from_reqwest("search", e))?;

        match envelope.get_mut("results").map(Value::take) {
            Some(Value::Array(results)) => {
                tracing::trace!(count = results.len(), "search response received");
                Ok(results)
            }
            Some(other) if !other.is_null() => Err(SearchError::Remote(
                "search response `results` is not an array".into(),
            )),
            _ => {
                tracing::warn!("search response has no `results`; treating as empty");
                Ok(Vec::new())
            }
        }
    }
}

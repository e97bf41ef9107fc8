//! Search orchestrator: workspace ownership, concurrent fan-out, merge, rank.
//!
//! A [`SearchOrchestrator`] resolves its credentials once at construction
//! and keeps the labelled workspaces until the credential set changes. Each
//! query then moves through `Idle → Fetching → Merging → Ranked`:
//!
//! 1. Fan out one search call per workspace with [`futures::future::join_all`]
//! 2. Wait for every call to settle; failures and timeouts are logged and
//!    contribute zero results
//! 3. Normalize each successful batch and append it to a single pool
//! 4. Rank the pool by fuzzy title relevance and truncate

use std::future::Future;
use std::time::Duration;

use crate::api::WorkspaceApi;
use crate::client::NotionClient;
use crate::config::{AllFailedPolicy, SearchConfig};
use crate::credential::{parse_credentials, Credential};
use crate::error::{Result, SearchError};
use crate::normalize::normalize_batch;
use crate::ranking::rank;
use crate::resolver::resolve_workspaces;
use crate::types::{NormalizedPage, RankedPage, SearchPhase, Workspace};

/// Owns the resolved workspaces and answers queries across all of them.
#[derive(Debug)]
pub struct SearchOrchestrator<A: WorkspaceApi = NotionClient> {
    api: A,
    config: SearchConfig,
    credentials: Vec<Credential>,
    workspaces: Vec<Workspace>,
}

impl SearchOrchestrator<NotionClient> {
    /// Build an orchestrator backed by the HTTP client and resolve the
    /// comma-separated tokens in `raw_tokens`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid. Label lookup
    /// failures never fail construction.
    pub async fn connect(raw_tokens: &str, config: SearchConfig) -> Result<Self> {
        let api = NotionClient::new(&config)?;
        Self::with_api(api, raw_tokens, config).await
    }
}

impl<A: WorkspaceApi> SearchOrchestrator<A> {
    /// Build an orchestrator over any [`WorkspaceApi`] implementation.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid.
    pub async fn with_api(api: A, raw_tokens: &str, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let credentials = parse_credentials(raw_tokens);
        tracing::info!(tokens = credentials.len(), "initialising workspace search");
        let workspaces = resolve_workspaces(&api, &credentials, call_timeout(&config)).await;
        Ok(Self {
            api,
            config,
            credentials,
            workspaces,
        })
    }

    /// Workspaces in credential order.
    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the credential set, re-resolving only if it changed.
    ///
    /// Returns `true` when the workspaces were rebuilt.
    pub async fn update_credentials(&mut self, raw_tokens: &str) -> bool {
        let credentials = parse_credentials(raw_tokens);
        if credentials == self.credentials {
            return false;
        }
        tracing::info!(tokens = credentials.len(), "credential set changed, re-resolving");
        self.workspaces =
            resolve_workspaces(&self.api, &credentials, call_timeout(&self.config)).await;
        self.credentials = credentials;
        true
    }

    /// Search every workspace and return at most `max_results` ranked pages.
    ///
    /// An empty or whitespace-only query returns an empty list without any
    /// network call, as does an orchestrator with no workspaces.
    ///
    /// # Errors
    ///
    /// Only [`SearchError::AllWorkspacesUnreachable`], and only under
    /// [`AllFailedPolicy::Error`].
    pub async fn search(&self, query: &str) -> Result<Vec<RankedPage>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            tracing::debug!("empty query, returning no results");
            return Ok(Vec::new());
        }

        let pool = self.collect_candidates(&query).await?;
        let ranked = rank(pool, &query, self.config.max_results);
        tracing::debug!(phase = %SearchPhase::Ranked, returned = ranked.len(), "query complete");
        Ok(ranked)
    }

    /// Fetch from all workspaces and merge every parseable record into one
    /// unranked pool, in workspace order.
    ///
    /// # Errors
    ///
    /// Same as [`SearchOrchestrator::search`].
    pub async fn collect_candidates(&self, query: &str) -> Result<Vec<NormalizedPage>> {
        if self.workspaces.is_empty() {
            tracing::debug!("no workspaces configured");
            return Ok(Vec::new());
        }

        tracing::debug!(phase = %SearchPhase::Fetching, workspaces = self.workspaces.len(), "fanning out");
        let timeout = call_timeout(&self.config);
        let calls = self.workspaces.iter().map(|workspace| async move {
            let outcome = bounded(timeout, self.api.search(&workspace.credential, query)).await;
            (workspace, outcome)
        });
        let outcomes = futures::future::join_all(calls).await;

        tracing::debug!(phase = %SearchPhase::Merging, "all workspace calls settled");
        let mut pool: Vec<NormalizedPage> = Vec::new();
        let mut errors: Vec<String> = Vec::new();

        for (workspace, outcome) in outcomes {
            match outcome {
                Ok(records) => {
                    let pages = normalize_batch(&records, &workspace.label);
                    tracing::debug!(
                        workspace = %workspace.label,
                        received = records.len(),
                        parsed = pages.len(),
                        "workspace returned results"
                    );
                    pool.extend(pages);
                }
                Err(err) => {
                    tracing::warn!(workspace = %workspace.label, error = %err, "workspace search failed");
                    errors.push(format!("{}: {err}", workspace.label));
                }
            }
        }

        if errors.len() == self.workspaces.len() {
            tracing::debug!(phase = %SearchPhase::Failed, "every workspace failed");
            if self.config.on_all_failed == AllFailedPolicy::Error {
                return Err(SearchError::AllWorkspacesUnreachable(errors.join("; ")));
            }
        } else if !errors.is_empty() {
            tracing::warn!(failed = errors.len(), "search failed in some workspaces");
        }

        tracing::debug!(candidates = pool.len(), "merged candidate pool");
        Ok(pool)
    }
}

fn call_timeout(config: &SearchConfig) -> Duration {
    Duration::from_secs(config.timeout_seconds)
}

/// Bound a remote call; an elapsed timer counts as a transport failure.
async fn bounded<T>(
    timeout: Duration,
    call: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::time::timeout(timeout, call)
        .await
        .map_err(|_| SearchError::Transport(format!("call timed out after {timeout:?}")))?
}

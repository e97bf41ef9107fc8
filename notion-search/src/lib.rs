//! # notion-search
//!
//! Concurrent search across several Notion workspaces.
//!
//! Given a comma-separated set of integration tokens, this crate resolves
//! each token to a labelled workspace, fans a query out to every workspace
//! at once, normalizes the heterogeneous page/database records into a
//! uniform shape, and ranks them by fuzzy title similarity.
//!
//! ## Design
//!
//! - One search call per workspace, all in flight together; the merge waits
//!   for every call to settle
//! - Graceful degradation: a failing workspace contributes zero results, a
//!   malformed record is skipped, a failed label lookup falls back to
//!   `"Unknown Workspace"`
//! - No caching between queries and no pagination beyond the first page
//!
//! ## Security
//!
//! - Tokens are redacted in `Debug`/`Display` and never appear in errors
//! - Query text is logged only at trace level

pub mod api;
pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod fuzzy;
pub mod normalize;
pub mod orchestrator;
pub mod ranking;
pub mod resolver;
pub mod types;

pub use api::WorkspaceApi;
pub use client::NotionClient;
pub use config::{AllFailedPolicy, SearchConfig};
pub use credential::{parse_credentials, Credential};
pub use error::{Result, SearchError};
pub use orchestrator::SearchOrchestrator;
pub use types::{NormalizedPage, PageIcon, RankedPage, Workspace};

/// Resolve `raw_tokens` and run a single query across all workspaces.
///
/// Convenience wrapper for one-shot use. Long-lived hosts should keep a
/// [`SearchOrchestrator`] so workspaces are resolved only once.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid, and
/// [`SearchError::AllWorkspacesUnreachable`] only under
/// [`AllFailedPolicy::Error`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> notion_search::Result<()> {
/// let config = notion_search::SearchConfig::default();
/// let results = notion_search::search("secret_a,secret_b", "roadmap", config).await?;
/// for result in &results {
///     println!("{} ({}): {}", result.page.title, result.page.workspace_label, result.page.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(raw_tokens: &str, query: &str, config: SearchConfig) -> Result<Vec<RankedPage>> {
    let orchestrator = SearchOrchestrator::connect(raw_tokens, config).await?;
    orchestrator.search(query).await
}

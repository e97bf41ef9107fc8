//! Trait definition for the remote workspace API.
//!
//! [`crate::client::NotionClient`] is the HTTP implementation. The
//! orchestrator and resolver are generic over [`WorkspaceApi`] so tests can
//! substitute an in-memory fake.

use serde_json::Value;

use crate::credential::Credential;
use crate::error::SearchError;

/// The two remote operations the core consumes.
///
/// All implementations must be `Send + Sync` so calls for different
/// workspaces can run concurrently.
pub trait WorkspaceApi: Send + Sync {
    /// Fetch the display name of the user behind `credential`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Transport`] on network failure or timeout and
    /// [`SearchError::Remote`] on a non-success status or malformed body.
    fn workspace_name(
        &self,
        credential: &Credential,
    ) -> impl std::future::Future<Output = Result<String, SearchError>> + Send;

    /// Run one search call and return the raw result records.
    ///
    /// `query` is sent as given; callers lowercase it beforehand.
    ///
    /// # Errors
    ///
    /// Same as [`WorkspaceApi::workspace_name`]. A response without a
    /// `results` container yields `Ok(vec![])`.
    fn search(
        &self,
        credential: &Credential,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Value>, SearchError>> + Send;
}

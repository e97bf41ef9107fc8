//! Concurrent resolution of credentials to labelled workspaces.
//!
//! Every credential produces a [`Workspace`]. A failed lookup only costs the
//! label, which falls back to [`crate::types::UNKNOWN_WORKSPACE`].

use std::time::Duration;

use crate::api::WorkspaceApi;
use crate::credential::Credential;
use crate::types::Workspace;

/// Resolve every credential's label concurrently.
///
/// Each lookup is bounded by `timeout`. The returned workspaces follow the
/// order of `credentials`, one per credential, whatever the outcome.
pub async fn resolve_workspaces<A: WorkspaceApi>(
    api: &A,
    credentials: &[Credential],
    timeout: Duration,
) -> Vec<Workspace> {
    let lookups = credentials.iter().map(|credential| async move {
        let outcome = tokio::time::timeout(timeout, api.workspace_name(credential)).await;
        match outcome {
            Ok(Ok(label)) => {
                tracing::debug!(%credential, workspace = %label, "resolved workspace");
                Workspace {
                    credential: credential.clone(),
                    label,
                }
            }
            Ok(Err(err)) => {
                tracing::warn!(%credential, error = %err, "workspace label lookup failed");
                Workspace::unlabelled(credential.clone())
            }
            Err(_) => {
                tracing::warn!(%credential, "workspace label lookup timed out");
                Workspace::unlabelled(credential.clone())
            }
        }
    });

    let workspaces = futures::future::join_all(lookups).await;

    let labelled = workspaces
        .iter()
        .filter(|ws| ws.label != crate::types::UNKNOWN_WORKSPACE)
        .count();
    tracing::info!(labelled, total = workspaces.len(), "workspaces initialised");

    workspaces
}

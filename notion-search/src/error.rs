//! Error types for the notion-search crate.
//!
//! Workspace-scoped failures (`Transport`, `Remote`) are downgraded to
//! "zero results from this workspace" by the orchestrator, and
//! record-scoped failures (`Parse`) to "skip this record". No bearer
//! tokens appear in error messages.

/// Errors that can occur while resolving workspaces or searching them.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Network failure or timeout talking to the remote API.
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote API answered with a non-success status or an
    /// unexpected envelope.
    #[error("remote error: {0}")]
    Remote(String),

    /// A single search record did not match any known shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Every configured workspace failed during one query. Only surfaced
    /// when [`crate::config::AllFailedPolicy::Error`] is selected.
    #[error("all workspaces unreachable: {0}")]
    AllWorkspacesUnreachable(String),
}

impl SearchError {
    /// Short, stable name of the error kind, suitable as a display title.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "TransportFailure",
            Self::Remote(_) => "RemoteFailure",
            Self::Parse(_) => "ParseFailure",
            Self::Config(_) => "ConfigError",
            Self::AllWorkspacesUnreachable(_) => "AllWorkspacesUnreachable",
        }
    }

    pub(crate) fn from_reqwest(context: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Transport(format!("{context} timed out"))
        } else if let Some(status) = err.status() {
            Self::Remote(format!("{context} returned HTTP {status}"))
        } else if err.is_decode() {
            Self::Remote(format!("{context} returned a malformed body: {err}"))
        } else {
            Self::Transport(format!("{context} failed: {err}"))
        }
    }
}

/// Convenience type alias for notion-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

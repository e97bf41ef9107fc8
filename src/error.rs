//! Error types for the launcher front-end.

/// Top-level error type for the launcher.
#[derive(Debug, thiserror::Error)]
pub enum LauncherError {
    /// Preferences could not be parsed or are invalid.
    #[error("config error: {0}")]
    Config(String),

    /// The platform URL handler could not be started.
    #[error("open error: {0}")]
    Open(String),

    /// Error raised by the search core.
    #[error(transparent)]
    Search(#[from] notion_search::SearchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LauncherError {
    /// Short name of the error kind, used as a diagnostic item title.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "ConfigError",
            Self::Open(_) => "OpenError",
            Self::Search(err) => err.kind(),
            Self::Io(_) => "IoError",
        }
    }
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, LauncherError>;

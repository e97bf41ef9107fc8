//! Host-side lifecycle: preferences in, display items out.
//!
//! A [`Launcher`] owns one [`SearchOrchestrator`] for the process lifetime.
//! Preference changes re-resolve workspaces only when the token set
//! changed. Any error from a query becomes a single diagnostic item so the
//! host always receives a list.

use notion_search::{SearchOrchestrator, WorkspaceApi};

use crate::config::LauncherConfig;
use crate::error::{LauncherError, Result};
use crate::items::DisplayItem;
use crate::open::{self, OpenTarget};

/// The launcher front-end over a search orchestrator.
#[derive(Debug)]
pub struct Launcher<A: WorkspaceApi = notion_search::NotionClient> {
    orchestrator: SearchOrchestrator<A>,
    open_in: OpenTarget,
}

impl Launcher {
    /// Start a launcher from preferences, resolving all workspaces.
    ///
    /// # Errors
    ///
    /// Returns an error if the search settings are invalid.
    pub async fn start(config: LauncherConfig) -> Result<Self> {
        let orchestrator = SearchOrchestrator::connect(&config.notion_token, config.search).await?;
        Ok(Self {
            orchestrator,
            open_in: config.open_in,
        })
    }
}

impl<A: WorkspaceApi> Launcher<A> {
    /// Wrap an existing orchestrator.
    pub fn with_orchestrator(orchestrator: SearchOrchestrator<A>, open_in: OpenTarget) -> Self {
        Self {
            orchestrator,
            open_in,
        }
    }

    pub fn orchestrator(&self) -> &SearchOrchestrator<A> {
        &self.orchestrator
    }

    pub fn open_in(&self) -> OpenTarget {
        self.open_in
    }

    /// Apply new preferences. Returns `true` if workspaces were re-resolved.
    ///
    /// Search settings are fixed at start; only tokens and `open_in` are
    /// reloaded.
    pub async fn reload(&mut self, config: &LauncherConfig) -> bool {
        self.open_in = config.open_in;
        self.orchestrator
            .update_credentials(&config.notion_token)
            .await
    }

    /// Run a query and return display items, never failing.
    pub async fn query(&self, text: &str) -> Vec<DisplayItem> {
        match self.orchestrator.search(text).await {
            Ok(ranked) => ranked.into_iter().map(DisplayItem::from).collect(),
            Err(err) => {
                let err = LauncherError::from(err);
                tracing::error!(error = %err, "search failed");
                vec![DisplayItem::diagnostic(&err)]
            }
        }
    }

    /// Open a selected item. Non-actionable items are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`LauncherError::Open`] if the URL handler cannot be started.
    pub fn select(&self, item: &DisplayItem) -> Result<()> {
        match item.url.as_deref() {
            Some(url) => open::launch(url, self.open_in),
            None => {
                tracing::debug!(title = %item.title, "ignoring non-actionable item");
                Ok(())
            }
        }
    }
}

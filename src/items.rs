//! Display items handed back to the launcher host.

use notion_search::RankedPage;
use notion_search::types::DEFAULT_ICON;
use serde::{Deserialize, Serialize};

use crate::error::LauncherError;

/// One row in the launcher's result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayItem {
    pub title: String,
    /// Workspace label, or the error message for diagnostics.
    pub description: String,
    /// Icon URL, emoji glyph, or the default icon path.
    pub icon: String,
    /// Target opened on selection. `None` for non-actionable items.
    pub url: Option<String>,
}

impl DisplayItem {
    /// A non-actionable item describing an error that escaped the search core.
    pub fn diagnostic(err: &LauncherError) -> Self {
        Self {
            title: err.kind().to_owned(),
            description: err.to_string(),
            icon: DEFAULT_ICON.to_owned(),
            url: None,
        }
    }

    pub fn is_actionable(&self) -> bool {
        self.url.is_some()
    }
}

impl From<RankedPage> for DisplayItem {
    fn from(ranked: RankedPage) -> Self {
        let page = ranked.page;
        Self {
            icon: page
                .icon
                .as_ref()
                .map_or(DEFAULT_ICON, |icon| icon.as_display())
                .to_owned(),
            title: page.title,
            description: page.workspace_label,
            url: Some(page.url),
        }
    }
}

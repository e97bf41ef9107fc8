//! Core types for workspaces, raw API records, and normalized results.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::credential::Credential;

/// Label used when a workspace's display name cannot be resolved.
pub const UNKNOWN_WORKSPACE: &str = "Unknown Workspace";

/// Icon shown for pages whose icon type has no direct rendering.
pub const DEFAULT_ICON: &str = "images/icon.png";

/// One authenticated workspace: a credential plus its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Bearer credential used for every call against this workspace.
    pub credential: Credential,
    /// Human-readable name, or [`UNKNOWN_WORKSPACE`] when resolution failed.
    pub label: String,
}

impl Workspace {
    /// A workspace whose label could not be resolved.
    pub fn unlabelled(credential: Credential) -> Self {
        Self {
            credential,
            label: UNKNOWN_WORKSPACE.to_owned(),
        }
    }
}

/// Kind of remote object a search record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Page,
    Database,
}

/// Plain-text view of one rich-text fragment.
#[derive(Debug, Clone, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: String,
}

/// Where a page lives. Only the discriminator matters for title extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct Parent {
    #[serde(rename = "type")]
    pub kind: String,
}

/// Icon descriptor attached to a page or database.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIcon {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub file: Option<FileRef>,
}

/// Hosted file reference inside an icon descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct FileRef {
    pub url: String,
}

/// One unparsed match from the search endpoint.
///
/// `properties` stays as loose JSON because property descriptors differ
/// per type; title extraction only looks at the entries it needs.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSearchResult {
    pub object: ObjectKind,
    pub url: String,
    #[serde(default)]
    pub icon: Option<RawIcon>,
    #[serde(default)]
    pub title: Option<Vec<RichText>>,
    #[serde(default)]
    pub parent: Option<Parent>,
    #[serde(default)]
    pub properties: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Normalized icon reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PageIcon {
    /// Hosted image URL.
    File(String),
    /// Emoji glyph.
    Emoji(String),
    /// An icon type with no direct rendering; hosts show [`DEFAULT_ICON`].
    Placeholder,
}

impl PageIcon {
    /// A string the host can render: the file URL, the glyph, or the
    /// default icon path.
    pub fn as_display(&self) -> &str {
        match self {
            Self::File(url) => url,
            Self::Emoji(glyph) => glyph,
            Self::Placeholder => DEFAULT_ICON,
        }
    }
}

/// A search record reduced to what the host displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedPage {
    pub title: String,
    pub url: String,
    pub icon: Option<PageIcon>,
    pub workspace_label: String,
}

/// A normalized page with its relevance score against the current query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPage {
    #[serde(flatten)]
    pub page: NormalizedPage,
    /// Fuzzy similarity in `0..=100`.
    pub score: u8,
}

/// Phase of a single query, logged as it advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Fetching,
    Merging,
    Ranked,
    Failed,
}

impl fmt::Display for SearchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Fetching => "fetching",
            Self::Merging => "merging",
            Self::Ranked => "ranked",
            Self::Failed => "failed",
        })
    }
}

//! Conversion of raw search records into [`NormalizedPage`] values.
//!
//! Title extraction follows the record shape:
//!
//! - databases carry a top-level `title` rich-text array; the first
//!   fragment wins and an empty array yields an empty title
//! - pages whose parent is a database are rows; the title lives in
//!   whichever property has `type == "title"`
//! - every other page keeps its title at `properties.title.title`, and a
//!   missing path is a parse failure for that record only

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::SearchError;
use crate::types::{NormalizedPage, ObjectKind, PageIcon, RawIcon, RawSearchResult};

/// Normalize one raw record for the workspace labelled `workspace_label`.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] when the record is not a page/database,
/// has no `url`, or is a plain page without `properties.title.title`.
pub fn normalize(raw: &Value, workspace_label: &str) -> Result<NormalizedPage, SearchError> {
    let record = RawSearchResult::deserialize(raw)
        .map_err(|e| SearchError::Parse(format!("unrecognised search record: {e}")))?;

    let title = extract_title(&record)?;
    let icon = record.icon.as_ref().map(extract_icon);

    Ok(NormalizedPage {
        title,
        url: record.url,
        icon,
        workspace_label: workspace_label.to_owned(),
    })
}

/// Normalize a whole batch, skipping records that fail to parse.
///
/// A malformed record is logged and dropped; it never affects its siblings.
pub fn normalize_batch(raw: &[Value], workspace_label: &str) -> Vec<NormalizedPage> {
    let mut pages = Vec::with_capacity(raw.len());
    for (index, record) in raw.iter().enumerate() {
        match normalize(record, workspace_label) {
            Ok(page) => pages.push(page),
            Err(err) => {
                tracing::debug!(workspace = workspace_label, index, error = %err, "skipping search record");
            }
        }
    }
    pages
}

/// Pick the title for a record according to its object kind and parent.
pub fn extract_title(record: &RawSearchResult) -> Result<String, SearchError> {
    if record.object == ObjectKind::Database {
        return Ok(record
            .title
            .as_ref()
            .and_then(|fragments| fragments.first())
            .map(|fragment| fragment.plain_text.clone())
            .unwrap_or_default());
    }

    let is_row = record
        .parent
        .as_ref()
        .is_some_and(|parent| parent.kind == "database_id");

    if is_row {
        Ok(record
            .properties
            .as_ref()
            .and_then(database_row_title)
            .unwrap_or_default())
    } else {
        record
            .properties
            .as_ref()
            .and_then(|props| props.get("title"))
            .and_then(|prop| prop.get("title"))
            .and_then(Value::as_array)
            .map(|fragments| join_plain_text(fragments))
            .ok_or_else(|| SearchError::Parse("page has no properties.title.title".into()))
    }
}

/// Find the property typed `title` and join its fragments.
fn database_row_title(properties: &Map<String, Value>) -> Option<String> {
    properties
        .values()
        .find(|prop| prop.get("type").and_then(Value::as_str) == Some("title"))
        .map(|prop| {
            prop.get("title")
                .and_then(Value::as_array)
                .map(|fragments| join_plain_text(fragments))
                .unwrap_or_default()
        })
}

fn join_plain_text(fragments: &[Value]) -> String {
    fragments
        .iter()
        .filter_map(|fragment| fragment.get("plain_text").and_then(Value::as_str))
        .collect()
}

/// Map an icon descriptor to a [`PageIcon`].
pub fn extract_icon(icon: &RawIcon) -> PageIcon {
    match icon.kind.as_str() {
        "file" => icon
            .file
            .as_ref()
            .map(|file| PageIcon::File(file.url.clone()))
            .unwrap_or(PageIcon::Placeholder),
        "emoji" => icon
            .emoji
            .clone()
            .map(PageIcon::Emoji)
            .unwrap_or(PageIcon::Placeholder),
        _ => PageIcon::Placeholder,
    }
}
